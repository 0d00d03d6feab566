//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title for the search box given its state
fn search_title(active: bool, query: &str, match_count: usize, vim_mode: bool) -> String {
    if active {
        format!(" Search ({} matches) - Esc to cancel ", match_count)
    } else if !query.is_empty() {
        // Search accepted (Enter pressed)
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        let search_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Search ({}) ", search_key)
    }
}

/// Render search input box above legend
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of visible rows
/// - `vim_mode`: Whether vim keybindings are enabled
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
    vim_mode: bool,
) {
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(active, query, match_count, vim_mode))
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
