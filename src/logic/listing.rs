//! Listing normalization
//!
//! Turns a raw `/files/list` response into the rows the UI shows and the
//! fingerprint used to skip redundant updates.

use std::cmp::Ordering;

use crate::api::RemoteFile;
use crate::logic::formatting::{format_size_grouped, format_timestamp};
use crate::model::DisplayFile;

/// Compare two entries by name, byte-lexicographically
pub fn compare_by_name(a: &RemoteFile, b: &RemoteFile) -> Ordering {
    a.name.cmp(&b.name)
}

/// Sort by name ascending. Stable: entries with equal names keep server order.
pub fn sort_by_name(files: &mut [RemoteFile]) {
    files.sort_by(compare_by_name);
}

pub fn to_display(file: &RemoteFile) -> DisplayFile {
    DisplayFile {
        name: file.name.clone(),
        size: format_size_grouped(file.size),
        created_at: format_timestamp(&file.created_at),
        modified_at: format_timestamp(&file.modified_at),
    }
}

/// Drop every entry whose name was already seen
///
/// Expects `files` sorted by name, so equal names are adjacent. The first
/// entry of each run is kept, which after a stable sort is the one the
/// server listed first.
pub fn dedup_by_name(files: &mut Vec<RemoteFile>) {
    files.dedup_by(|later, kept| later.name == kept.name);
}

/// Turn a raw server listing into the rows shown on screen
///
/// Sorts by name, keeps a single entry per name, and formats sizes and
/// timestamps for display.
///
/// # Arguments
/// * `files` - Entries of one `/files/list` response, in server order
///
/// # Returns
/// Display rows ordered by name with unique names. The result depends
/// only on the set of entries, never on the order the server sent them in
/// (apart from which duplicate wins).
///
/// # Examples
/// ```
/// use webftp_tui::api::RemoteFile;
/// use webftp_tui::logic::listing::normalize;
///
/// let file = |name: &str, size| RemoteFile {
///     name: name.to_string(),
///     size,
///     created_at: "2024-01-02T03:04:05+00:00".to_string(),
///     modified_at: "2024-01-02T03:04:05+00:00".to_string(),
/// };
///
/// let rows = normalize(vec![file("b.txt", 2048), file("a.txt", 1024), file("b.txt", 1)]);
/// let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, vec!["a.txt", "b.txt"]);
/// assert_eq!(rows[1].size, "2,048");
/// ```
pub fn normalize(mut files: Vec<RemoteFile>) -> Vec<DisplayFile> {
    sort_by_name(&mut files);
    dedup_by_name(&mut files);
    files.iter().map(to_display).collect()
}

/// Stable serialization of the display rows
///
/// Two listings render identically exactly when their fingerprints match,
/// so comparing fingerprints is enough to skip a redundant redraw.
///
/// # Arguments
/// * `rows` - Output of [`normalize`]
///
/// # Returns
/// * `Ok(json)` - Compact JSON of the rows, using the wire field names
/// * `Err` - Only if serialization itself fails
pub fn fingerprint(rows: &[DisplayFile]) -> serde_json::Result<String> {
    serde_json::to_string(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(name: &str, size: u64) -> RemoteFile {
        RemoteFile {
            name: name.to_string(),
            size,
            created_at: "2024-01-02T03:04:05+00:00".to_string(),
            modified_at: "2024-01-02T03:04:05+00:00".to_string(),
        }
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let mut files = vec![remote("b.txt", 1), remote("B.txt", 1), remote("a.txt", 1), remote("a", 1)];
        sort_by_name(&mut files);
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["B.txt", "a", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut files = vec![remote("dup", 1), remote("a", 0), remote("dup", 2)];
        sort_by_name(&mut files);
        let sizes: Vec<u64> = files.iter().map(|f| f.size).collect();
        assert_eq!(sizes, vec![0, 1, 2]);
    }

    #[test]
    fn test_normalize_keeps_first_of_duplicate_names() {
        let rows = normalize(vec![remote("dup.txt", 1), remote("a", 0), remote("dup.txt", 2)]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "dup.txt"]);
        assert_eq!(rows[1].size, "1");
    }

    #[test]
    fn test_dedup_leaves_distinct_names() {
        let mut files = vec![remote("a", 1), remote("b", 2), remote("c", 3)];
        dedup_by_name(&mut files);
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_normalize_formats_size() {
        let rows = normalize(vec![remote("b.txt", 2048), remote("a.txt", 1024)]);
        assert_eq!(rows[0].name, "a.txt");
        assert_eq!(rows[0].size, "1,024");
        assert_eq!(rows[1].name, "b.txt");
        assert_eq!(rows[1].size, "2,048");
    }

    #[test]
    fn test_fingerprint_ignores_server_order() {
        let first = normalize(vec![remote("b", 2), remote("a", 1)]);
        let second = normalize(vec![remote("a", 1), remote("b", 2)]);
        assert_eq!(fingerprint(&first).unwrap(), fingerprint(&second).unwrap());
    }

    #[test]
    fn test_fingerprint_detects_size_change() {
        let before = normalize(vec![remote("a", 1)]);
        let after = normalize(vec![remote("a", 2)]);
        assert_ne!(fingerprint(&before).unwrap(), fingerprint(&after).unwrap());
    }

    #[test]
    fn test_fingerprint_uses_wire_field_names() {
        let rows = normalize(vec![remote("a", 1)]);
        let fp = fingerprint(&rows).unwrap();
        assert!(fp.starts_with(r#"[{"name":"a","size":"1","createdAt":"#));
    }
}
