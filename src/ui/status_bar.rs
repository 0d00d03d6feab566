use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::ConnectionState;

/// Build the status bar text
///
/// Shows connection state, number of files on the server, and the download
/// link of the selected file.
pub fn build_status_line(
    connection_state: &ConnectionState,
    total_files: usize,
    download_url: Option<&str>,
) -> String {
    let connection = match connection_state {
        ConnectionState::Connecting => "Connecting".to_string(),
        ConnectionState::Connected => "Connected".to_string(),
        ConnectionState::Disconnected { error_type, .. } => {
            format!("Disconnected ({})", error_type.label())
        }
    };

    let link = download_url.unwrap_or("-");

    format!(
        "{:<28} │ {:>8} files │ Link: {}",
        connection, total_files, link
    )
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    connection_state: &ConnectionState,
    total_files: usize,
    download_url: Option<&str>,
) {
    let color = match connection_state {
        ConnectionState::Connected => Color::Gray,
        ConnectionState::Connecting => Color::Yellow,
        ConnectionState::Disconnected { .. } => Color::Red,
    };

    let line = Line::from(Span::raw(build_status_line(
        connection_state,
        total_files,
        download_url,
    )));

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status")
            .style(Style::default().fg(color)),
    );

    f.render_widget(bar, area);
}
