use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the pending upload panel (border + three detail lines)
pub const UPLOAD_PANEL_HEIGHT: u16 = 5;

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top server info bar area
    pub server_area: Rect,
    /// Pending upload panel
    pub upload_area: Rect,
    /// File listing (table or list)
    pub files_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, search_visible: bool) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Server info bar
            Constraint::Length(UPLOAD_PANEL_HEIGHT), // Pending upload
            Constraint::Min(3),                      // File listing
            Constraint::Length(search_height),       // Search input (0 when hidden)
            Constraint::Length(legend_height),       // Legend (exact fit for wrapped content)
            Constraint::Length(3),                   // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        server_area: chunks[0],
        upload_area: chunks[1],
        files_area: chunks[2],
        search_area: if search_visible { Some(chunks[3]) } else { None },
        legend_area: chunks[4],
        status_area: chunks[5],
    }
}
