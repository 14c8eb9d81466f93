use std::path::{Component, Path};

/// File-name prefix shared by the DAP SDK module pages.
pub const DOMAIN_PREFIX: &str = "dap_";

/// Derives the module identity of a document: its file name without the
/// extension.
///
/// Names carrying [`DOMAIN_PREFIX`] are the common case and are returned as
/// is. Pages living under a `modules/.../core` path also keep the bare name,
/// as does everything else.
pub fn resolve_module_name(docs_root: &Path, file: &Path) -> String {
    let name = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if name.starts_with(DOMAIN_PREFIX) {
        return name;
    }

    let relative = file.strip_prefix(docs_root).unwrap_or(file);
    let mut under_modules = false;
    let mut under_core = false;
    for component in relative.components() {
        if let Component::Normal(segment) = component {
            match &*segment.to_string_lossy() {
                "modules" => under_modules = true,
                "core" => under_core = true,
                _ => {}
            }
        }
    }

    if under_modules && under_core {
        // No core-specific naming rule exists yet; same identity as below.
        return name;
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_name_kept() {
        let root = Path::new("/docs");
        let file = Path::new("/docs/dap-sdk/docs/modules/net/dap_http.md");
        assert_eq!(resolve_module_name(root, file), "dap_http");
    }

    #[test]
    fn test_core_path_without_prefix() {
        let root = Path::new("/docs");
        let file = Path::new("/docs/dap-sdk/docs/modules/core/portable_endian.md");
        assert_eq!(resolve_module_name(root, file), "portable_endian");
    }

    #[test]
    fn test_plain_name_outside_modules() {
        let root = Path::new("/docs");
        let file = Path::new("/docs/cellframe-sdk/docs/modules/chain/README.md");
        assert_eq!(resolve_module_name(root, file), "README");
    }

    #[test]
    fn test_only_last_extension_stripped() {
        let root = Path::new("/docs");
        let file = Path::new("/docs/x/dap_tsd.v2.md");
        assert_eq!(resolve_module_name(root, file), "dap_tsd.v2");
    }

    #[test]
    fn test_file_outside_root() {
        let root = Path::new("/docs");
        let file = Path::new("/elsewhere/modules/core/strings.md");
        assert_eq!(resolve_module_name(root, file), "strings");
    }
}
