use crate::api::ServerInfo;
use crate::model::ConnectionState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render connection status span based on connection state
fn render_connection_status(state: &ConnectionState) -> Vec<Span<'_>> {
    match state {
        ConnectionState::Connected => vec![
            Span::styled("🟢 Connected", Style::default().fg(Color::Green)),
            Span::raw(" | "),
        ],
        ConnectionState::Connecting => vec![
            Span::styled("🟡 Connecting... ", Style::default().fg(Color::Yellow)),
            Span::raw("| "),
        ],
        ConnectionState::Disconnected { error_type, .. } => vec![
            Span::styled(
                format!("🔴 Disconnected ({}) ", error_type.label()),
                Style::default().fg(Color::Red),
            ),
            Span::raw("| "),
        ],
    }
}

/// Build the bar's single line: connection, server identity, base URL and,
/// while disconnected, the most recent poll error
fn build_server_line<'a>(
    base_url: &str,
    connection_state: &'a ConnectionState,
    server_info: Option<&ServerInfo>,
) -> Line<'a> {
    let mut spans = render_connection_status(connection_state);

    match server_info {
        Some(info) => {
            spans.push(Span::styled(
                format!("{} v{}", info.app_name, info.version),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(format!(
                " | Host: {} | You: {} | {}",
                info.current_host, info.client_ip, base_url
            )));
        }
        None => {
            spans.push(Span::styled("unknown server", Style::default().fg(Color::Gray)));
            spans.push(Span::raw(format!(" | {}", base_url)));
        }
    }

    if let ConnectionState::Disconnected { message, .. } = connection_state {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Last error: {}", message),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}

/// Render the server info bar at the top of the screen
pub fn render_server_bar(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    connection_state: &ConnectionState,
    server_info: Option<&ServerInfo>,
) {
    let line = build_server_line(base_url, connection_state, server_info);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Simple WebFTP "),
    );

    f.render_widget(bar, area);
}
