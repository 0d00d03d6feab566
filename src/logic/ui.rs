//! UI state transition logic
//!
//! Pure functions for UI state cycling and transitions.

use crate::ViewMode;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 3000;

/// Toggle between the table and the plain list rendering
///
/// # Examples
/// ```
/// use webftp_tui::ViewMode;
/// use webftp_tui::logic::ui::cycle_view_mode;
///
/// assert_eq!(cycle_view_mode(ViewMode::Table), ViewMode::List);
/// assert_eq!(cycle_view_mode(ViewMode::List), ViewMode::Table);
/// ```
pub fn cycle_view_mode(current: ViewMode) -> ViewMode {
    match current {
        ViewMode::Table => ViewMode::List,
        ViewMode::List => ViewMode::Table,
    }
}

/// Whether a toast shown `elapsed_ms` ago should be dismissed
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Error toasts get the red theme
pub fn is_error_toast(message: &str) -> bool {
    message.starts_with("Error")
}
