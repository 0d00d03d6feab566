//! Search Logic
//!
//! Pure functions for filtering listing rows by search queries.
//! Supports wildcard patterns using the glob crate.

use crate::model::DisplayFile;

/// Match a search query against one field value
///
/// # Pattern Rules
/// - "*" and "?" behave as glob wildcards against the whole value
/// - Otherwise the query matches any substring
/// - Matches are case-insensitive
///
/// # Examples
/// ```
/// use webftp_tui::logic::search::search_matches;
///
/// assert!(search_matches("report", "Q3-Report.pdf"));
/// assert!(search_matches("*.pdf", "q3-report.pdf"));
/// assert!(!search_matches("*.txt", "q3-report.pdf"));
/// ```
pub fn search_matches(query: &str, value: &str) -> bool {
    if query.is_empty() {
        return true; // Empty query matches everything
    }

    let query_lower = query.to_lowercase();
    let value_lower = value.to_lowercase();

    if let Ok(pattern) = glob::Pattern::new(&query_lower) {
        if pattern.matches(&value_lower) {
            return true;
        }
    }

    // Substring match covers plain queries and invalid patterns
    value_lower.contains(&query_lower)
}

/// Whether any column of `file` matches `query`
pub fn row_matches(file: &DisplayFile, query: &str) -> bool {
    search_matches(query, &file.name)
        || search_matches(query, &file.size)
        || search_matches(query, &file.created_at)
        || search_matches(query, &file.modified_at)
}

/// Indices of the rows matching `query`, in display order
pub fn filter_indices(files: &[DisplayFile], query: &str) -> Vec<usize> {
    files
        .iter()
        .enumerate()
        .filter(|(_, file)| row_matches(file, query))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, size: &str) -> DisplayFile {
        DisplayFile {
            name: name.to_string(),
            size: size.to_string(),
            created_at: "1/2/2024, 3:04:05 AM".to_string(),
            modified_at: "1/5/2024, 9:00:00 PM".to_string(),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        let files = vec![row("a", "1"), row("b", "2")];
        assert_eq!(filter_indices(&files, ""), vec![0, 1]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert!(search_matches("READ", "readme.md"));
        assert!(!search_matches("xyz", "readme.md"));
    }

    #[test]
    fn test_wildcard_matches_whole_value() {
        assert!(search_matches("*.md", "README.md"));
        assert!(search_matches("read?e.md", "readme.md"));
        assert!(!search_matches("*.rs", "README.md"));
    }

    #[test]
    fn test_invalid_pattern_falls_back_to_substring() {
        assert!(search_matches("[abc", "file[abc].txt"));
    }

    #[test]
    fn test_filter_matches_any_column() {
        let files = vec![row("alpha.txt", "1,024"), row("beta.txt", "2,048")];
        assert_eq!(filter_indices(&files, "2,048"), vec![1]);
        assert_eq!(filter_indices(&files, "1/5/2024"), vec![0, 1]);
        assert_eq!(filter_indices(&files, "alpha"), vec![0]);
    }
}
