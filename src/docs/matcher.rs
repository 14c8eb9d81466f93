use crate::types::MatchContext;

/// Number of lines kept on each side of a matching line.
pub const CONTEXT_RADIUS: usize = 1;

/// Finds every line of `content` containing `query`, ignoring case.
///
/// Each hit carries the matching line plus [`CONTEXT_RADIUS`] lines on each
/// side, clipped to the document. Hits are returned in line order and
/// overlapping windows are kept as they are. `query` must not be empty.
pub fn find_matches(content: &str, query: &str) -> Vec<MatchContext> {
    let needle = query.to_lowercase();
    let lines: Vec<&str> = content.split('\n').collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&needle))
        .map(|(index, _)| {
            let start = index.saturating_sub(CONTEXT_RADIUS);
            let end = (index + CONTEXT_RADIUS + 1).min(lines.len());
            MatchContext {
                line_index: index,
                lines: lines[start..end].iter().map(|l| l.to_string()).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_with_neighbours() {
        let content = "# dap_cbuf\nRing buffer implementation\nThread safe";
        let matches = find_matches(content, "ring");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line_index, 1);
        assert_eq!(
            matches[0].lines,
            vec!["# dap_cbuf", "Ring buffer implementation", "Thread safe"]
        );
    }

    #[test]
    fn test_clipped_at_boundaries() {
        let content = "alpha\nbeta\ngamma";
        let first = find_matches(content, "ALPHA");
        assert_eq!(first[0].lines, vec!["alpha", "beta"]);

        let last = find_matches(content, "gam");
        assert_eq!(last[0].lines, vec!["beta", "gamma"]);
    }

    #[test]
    fn test_overlapping_windows_not_merged() {
        let content = "key one\nkey two\nother";
        let matches = find_matches(content, "key");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].lines, vec!["key one", "key two"]);
        assert_eq!(matches[1].lines, vec!["key one", "key two", "other"]);
    }

    #[test]
    fn test_substring_not_word() {
        let matches = find_matches("hashing functions", "ash");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].excerpt(), "hashing functions");
    }

    #[test]
    fn test_no_match() {
        assert!(find_matches("nothing here", "crypto").is_empty());
    }

    #[test]
    fn test_single_line_document() {
        let matches = find_matches("only line", "only");
        assert_eq!(matches[0].lines, vec!["only line"]);
    }
}
