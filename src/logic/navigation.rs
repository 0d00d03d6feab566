//! Navigation selection logic
//!
//! Pure functions for calculating selection indices in the file listing.

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next row. If at the end, wraps around to
/// the beginning. If no row is selected, selects the first one.
///
/// # Arguments
/// * `current` - Current selection index (None if no selection)
/// * `list_len` - Number of visible rows
///
/// # Returns
/// * `Some(index)` - The next selection index
/// * `None` - If the list is empty
///
/// # Examples
/// ```
/// use webftp_tui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// Moves the selection to the previous row. If at the beginning, wraps
/// around to the end. If no row is selected, selects the last one.
///
/// # Arguments
/// * `current` - Current selection index (None if no selection)
/// * `list_len` - Number of visible rows
///
/// # Returns
/// * `Some(index)` - The previous selection index
/// * `None` - If the list is empty
///
/// # Examples
/// ```
/// use webftp_tui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Pull a selection back inside `0..list_len`
///
/// Used when the row count shrank under the selection, for instance after a
/// poll removed files or the search filter hid them.
///
/// # Arguments
/// * `current` - Current selection index (None if no selection)
/// * `list_len` - Number of visible rows
///
/// # Returns
/// * `Some(index)` - The selection, moved to the last row if it was past it
/// * `None` - If the list is empty or nothing was selected
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    current.map(|i| i.min(list_len - 1))
}

/// Index of the first row, if any
pub fn first_selection(list_len: usize) -> Option<usize> {
    if list_len == 0 {
        None
    } else {
        Some(0)
    }
}

pub fn last_selection(list_len: usize) -> Option<usize> {
    list_len.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(5), 0), None);
    }

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0)); // Single item wraps to itself
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_wrapping() {
        assert_eq!(prev_selection(Some(0), 5), Some(4));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_prev_selection_out_of_bounds() {
        // Listing shrank under the selection
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(None, 3), None);
        assert_eq!(clamp_selection(Some(1), 3), Some(1));
        assert_eq!(clamp_selection(Some(7), 3), Some(2));
        assert_eq!(clamp_selection(Some(0), 0), None);
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(first_selection(0), None);
        assert_eq!(first_selection(4), Some(0));
        assert_eq!(last_selection(0), None);
        assert_eq!(last_selection(4), Some(3));
    }
}
