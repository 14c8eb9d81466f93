use std::fs;
use std::path::{Component as PathComponent, Path};

use tracing::debug;

use crate::config::DocsConfig;
use crate::docs::categories::CategoryPaths;
use crate::docs::matcher::find_matches;
use crate::docs::module_name::resolve_module_name;
use crate::docs::scanner::scan_documents;
use crate::errors::{DocsError, Result};
use crate::types::{ArchitectureDoc, Category, Component, ModuleDoc, SearchResult};

/// Built-in description returned for the `overview` component.
pub const ARCHITECTURE_OVERVIEW: &str = "# DAP SDK Architecture

## System components

### DAP SDK Core
- **Crypto module**: encryption, signatures, hashing
- **Net module**: network communication, HTTP/JSON-RPC
- **Core module**: basic utilities, math, strings

### CellFrame SDK
- **Chain module**: blockchain logic
- **Wallet module**: wallet management
- **Consensus module**: consensus algorithms
- **Mining module**: mining and validation

### DAP SDK Core modules
- dap_cbuf: ring buffers
- dap_math_ops: math operations
- dap_math_convert: number conversion
- portable_endian: cross-platform endianness helpers
- dap_strfuncs: string functions
- dap_tsd: typed serialization
- dap_json_rpc_errors: JSON-RPC error handling
- dap_fnmatch: pattern matching
";

/// Answers documentation queries by reading the tree on every call.
pub struct DocumentRepository {
    config: DocsConfig,
    paths: CategoryPaths,
}

impl DocumentRepository {
    pub fn new(config: DocsConfig) -> Self {
        let paths = CategoryPaths::new(config.docs_root.clone());
        Self { config, paths }
    }

    /// Returns a reference to the configuration this repository reads with.
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub fn paths(&self) -> &CategoryPaths {
        &self.paths
    }

    /// Searches every document in `category` for lines containing `query`.
    ///
    /// Only documents with at least one hit are returned, in scan order,
    /// each with at most `max_matches_per_file` contexts.
    pub fn search(&self, query: &str, category: Category) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(DocsError::invalid_argument(
                "query parameter is required and cannot be empty",
            ));
        }

        let mut results = Vec::new();
        for root in self.paths.search_roots(category) {
            let files = scan_documents(&root, &self.config.extension)?;
            debug!(root = %root.display(), files = files.len(), "searching root");

            for file in files {
                let content = read_document(&file)?;
                let mut matches = find_matches(&content, query);
                if matches.is_empty() {
                    continue;
                }
                matches.truncate(self.config.max_matches_per_file);

                results.push(SearchResult {
                    file: self.relative_display(&file),
                    module: resolve_module_name(&self.config.docs_root, &file),
                    matches,
                });
            }
        }

        debug!(query = %query, category = %category, hits = results.len(), "search finished");
        Ok(results)
    }

    /// Fetches the page of a single module.
    ///
    /// `category` is the caller's label. It is parsed leniently to pick the
    /// directory, and echoed verbatim in [`ModuleDoc::NotFound`] when the
    /// module has no page.
    pub fn get_module_doc(&self, module: &str, category: &str) -> Result<ModuleDoc> {
        if module.is_empty() {
            return Err(DocsError::invalid_argument("module parameter is required"));
        }

        let lookup_category = CategoryPaths::module_category(Category::parse_lenient(category));
        let not_found = || ModuleDoc::NotFound {
            module: module.to_string(),
            category: category.to_string(),
        };

        if !is_plain_name(module) {
            debug!(module = %module, "module name is not a plain file name");
            return Ok(not_found());
        }

        let path = self
            .paths
            .module_path(module, lookup_category, &self.config.extension);
        if !path.is_file() {
            debug!(path = %path.display(), "module page not found");
            return Ok(not_found());
        }

        let content = read_document(&path)?;
        Ok(ModuleDoc::Found {
            module: module.to_string(),
            path,
            content,
        })
    }

    /// Lists module names in `category`, without duplicates, in the order
    /// they are first discovered.
    pub fn list_modules(&self, category: Category) -> Result<Vec<String>> {
        let mut modules: Vec<String> = Vec::new();
        for root in self.paths.search_roots(category) {
            for file in scan_documents(&root, &self.config.extension)? {
                let name = resolve_module_name(&self.config.docs_root, &file);
                if !name.is_empty() && !modules.contains(&name) {
                    modules.push(name);
                }
            }
        }
        Ok(modules)
    }

    /// Returns the architecture document of `component`.
    ///
    /// The overview is built in and never touches the filesystem. The SDK
    /// documents must exist; a missing one is an error.
    pub fn get_architecture_info(&self, component: Component) -> Result<ArchitectureDoc> {
        let Some(path) = self.paths.architecture_path(component) else {
            return Ok(ArchitectureDoc {
                component,
                content: ARCHITECTURE_OVERVIEW.to_string(),
            });
        };

        if !path.is_file() {
            return Err(DocsError::ArchitectureMissing {
                component: component.to_string(),
                path: path.display().to_string(),
            });
        }

        Ok(ArchitectureDoc {
            component,
            content: read_document(&path)?,
        })
    }

    fn relative_display(&self, file: &Path) -> String {
        file.strip_prefix(&self.config.docs_root)
            .unwrap_or(file)
            .to_string_lossy()
            .into_owned()
    }
}

/// Reads a document as text, replacing invalid UTF-8.
fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| DocsError::File {
        message: format!("failed to read document: {}", e),
        path: path.display().to_string(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// True when `name` is a single path segment that cannot escape its directory.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(PathComponent::Normal(_)), None)
    ) && !name.contains(|c: char| c == '/' || c == '\\')
}
