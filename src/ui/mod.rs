// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, panels, listing)
// - render: Main orchestration function that coordinates all rendering
// - server_bar: Renders top bar (connection, server identity, base URL)
// - upload_panel: Renders the pending upload details
// - file_table: Renders the listing as a table or a plain list
// - search: Renders search input box with query and match count
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with the selected file's link
// - dialogs: Renders the file path prompt
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod file_table;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod server_bar;
pub mod status_bar;
pub mod toast;
pub mod upload_panel;

// Re-export main render function for convenience
pub use render::render;
