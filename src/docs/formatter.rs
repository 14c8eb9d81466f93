use crate::types::{ArchitectureDoc, Component, ModuleDoc, SearchResult};

/// Formats search results as the plain-text listing returned to clients.
///
/// The header carries the number of matching files, followed by one block
/// per file with its path, module and bulleted excerpts.
pub fn format_search_results(query: &str, results: &[SearchResult]) -> String {
    let mut out = format!(
        "Found {} files with matches for query \"{}\":\n\n",
        results.len(),
        query
    );

    let blocks: Vec<String> = results
        .iter()
        .map(|r| {
            let bullets: Vec<String> = r
                .matches
                .iter()
                .map(|m| format!("  • {}", m.excerpt()))
                .collect();
            format!(
                "📄 {}\n📦 Module: {}\n🔍 Matches:\n{}\n",
                r.file,
                r.module,
                bullets.join("\n")
            )
        })
        .collect();

    out.push_str(&blocks.join("\n"));
    out
}

/// Renders a module page under a heading, or the soft-miss notice.
pub fn format_module_doc(doc: &ModuleDoc) -> String {
    match doc {
        ModuleDoc::Found {
            module, content, ..
        } => format!("# Module documentation: {}\n\n{}", module, content),
        ModuleDoc::NotFound { module, category } => format!(
            "Documentation for module '{}' not found in category '{}'",
            module, category
        ),
    }
}

/// Renders the bulleted module list for the category label the caller gave.
pub fn format_module_list(category: &str, modules: &[String]) -> String {
    let bullets: Vec<String> = modules.iter().map(|m| format!("• {}", m)).collect();
    format!(
        "Available modules in category '{}':\n\n{}",
        category,
        bullets.join("\n")
    )
}

/// The built-in overview already carries its own heading.
pub fn format_architecture(doc: &ArchitectureDoc) -> String {
    match doc.component {
        Component::Overview => doc.content.clone(),
        component => format!("# Architecture: {}\n\n{}", component, doc.content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchContext;

    #[test]
    fn test_search_format() {
        let results = vec![SearchResult {
            file: "dap-sdk/docs/modules/core/dap_cbuf.md".to_string(),
            module: "dap_cbuf".to_string(),
            matches: vec![MatchContext {
                line_index: 0,
                lines: vec!["Ring buffer".to_string(), "API".to_string()],
            }],
        }];
        let text = format_search_results("ring", &results);
        assert!(text.starts_with("Found 1 files with matches for query \"ring\":\n\n"));
        assert!(text.contains("📄 dap-sdk/docs/modules/core/dap_cbuf.md\n"));
        assert!(text.contains("📦 Module: dap_cbuf\n"));
        assert!(text.contains("  • Ring buffer\nAPI\n"));
    }

    #[test]
    fn test_empty_search_format() {
        let text = format_search_results("zzz", &[]);
        assert_eq!(text, "Found 0 files with matches for query \"zzz\":\n\n");
    }

    #[test]
    fn test_module_list_format() {
        let text = format_module_list(
            "net",
            &["dap_http".to_string(), "dap_json_rpc".to_string()],
        );
        assert_eq!(
            text,
            "Available modules in category 'net':\n\n• dap_http\n• dap_json_rpc"
        );
    }

    #[test]
    fn test_not_found_format() {
        let text = format_module_doc(&ModuleDoc::NotFound {
            module: "dap_nothing".to_string(),
            category: "cellframe".to_string(),
        });
        assert_eq!(
            text,
            "Documentation for module 'dap_nothing' not found in category 'cellframe'"
        );
    }
}
