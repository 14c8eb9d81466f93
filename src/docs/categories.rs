use std::path::{Path, PathBuf};

use crate::types::{Category, Component};

/// Directory, relative to the docs root, holding each concrete category.
fn category_dir(category: Category) -> &'static str {
    match category {
        Category::Core => "dap-sdk/docs/modules/core",
        Category::Crypto => "dap-sdk/docs/modules/crypto",
        Category::Net => "dap-sdk/docs/modules/net",
        Category::Cellframe => "cellframe-sdk/docs/modules",
        Category::All => "",
    }
}

/// Resolves categories and components to filesystem locations under a
/// fixed documentation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPaths {
    docs_root: PathBuf,
}

impl CategoryPaths {
    pub fn new(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
        }
    }

    pub fn docs_root(&self) -> &Path {
        &self.docs_root
    }

    /// Roots searched for a category. `All` expands to every concrete
    /// category in core, crypto, net, cellframe order.
    pub fn search_roots(&self, category: Category) -> Vec<PathBuf> {
        match category {
            Category::All => Category::CONCRETE
                .iter()
                .map(|c| self.docs_root.join(category_dir(*c)))
                .collect(),
            concrete => vec![self.docs_root.join(category_dir(concrete))],
        }
    }

    /// Category whose directory is consulted for a single module lookup.
    ///
    /// Only core, crypto and net pages can be fetched by name; anything
    /// else is looked up in core.
    pub fn module_category(category: Category) -> Category {
        match category {
            Category::Core | Category::Crypto | Category::Net => category,
            Category::Cellframe | Category::All => Category::Core,
        }
    }

    /// Expected location of a module page.
    pub fn module_path(&self, module: &str, category: Category, extension: &str) -> PathBuf {
        let dir = category_dir(Self::module_category(category));
        self.docs_root
            .join(dir)
            .join(format!("{}.{}", module, extension))
    }

    /// Location of an SDK architecture document; `None` for the overview,
    /// which is not backed by a file.
    pub fn architecture_path(&self, component: Component) -> Option<PathBuf> {
        match component {
            Component::DapSdk => Some(self.docs_root.join("dap-sdk/docs/architecture.md")),
            Component::CellframeSdk => {
                Some(self.docs_root.join("cellframe-sdk/docs/architecture.md"))
            }
            Component::Overview => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_expands_in_fixed_order() {
        let paths = CategoryPaths::new("/docs");
        let roots = paths.search_roots(Category::All);
        assert_eq!(
            roots,
            vec![
                PathBuf::from("/docs/dap-sdk/docs/modules/core"),
                PathBuf::from("/docs/dap-sdk/docs/modules/crypto"),
                PathBuf::from("/docs/dap-sdk/docs/modules/net"),
                PathBuf::from("/docs/cellframe-sdk/docs/modules"),
            ]
        );
    }

    #[test]
    fn test_unknown_category_falls_back_to_all() {
        let paths = CategoryPaths::new("/docs");
        let lenient = Category::parse_lenient("wallets");
        assert_eq!(lenient, Category::All);
        assert_eq!(paths.search_roots(lenient).len(), 4);
    }

    #[test]
    fn test_single_category_root() {
        let paths = CategoryPaths::new("/docs");
        assert_eq!(
            paths.search_roots(Category::Cellframe),
            vec![PathBuf::from("/docs/cellframe-sdk/docs/modules")]
        );
    }

    #[test]
    fn test_module_path_falls_back_to_core() {
        let paths = CategoryPaths::new("/docs");
        assert_eq!(
            paths.module_path("dap_cbuf", Category::Cellframe, "md"),
            PathBuf::from("/docs/dap-sdk/docs/modules/core/dap_cbuf.md")
        );
        assert_eq!(
            paths.module_path("dap_enc", Category::Crypto, "md"),
            PathBuf::from("/docs/dap-sdk/docs/modules/crypto/dap_enc.md")
        );
    }

    #[test]
    fn test_architecture_paths() {
        let paths = CategoryPaths::new("/docs");
        assert_eq!(
            paths.architecture_path(Component::DapSdk),
            Some(PathBuf::from("/docs/dap-sdk/docs/architecture.md"))
        );
        assert!(paths.architecture_path(Component::Overview).is_none());
    }
}
