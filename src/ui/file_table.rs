//! File Listing UI
//!
//! Renders the synchronized listing either as a four-column table or as a
//! plain one-line-per-file list. Only rows that pass the search filter are
//! passed in.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::{ConnectionState, DisplayFile};
use crate::utils::truncate_to_width;
use crate::ViewMode;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Title with row counts, e.g. " Available files (3) " or " Available files (1 of 3) "
pub fn listing_title(visible: usize, total: usize, view_mode: ViewMode) -> String {
    if visible == total {
        format!(" Available files ({}) [{}] ", total, view_mode.as_str())
    } else {
        format!(
            " Available files ({} of {}) [{}] ",
            visible,
            total,
            view_mode.as_str()
        )
    }
}

fn empty_message(connection_state: &ConnectionState, total: usize) -> &'static str {
    match connection_state {
        ConnectionState::Connecting => "Waiting for server...",
        _ if total == 0 => "No files on server",
        _ => "No files match the search",
    }
}

/// Render the listing
pub fn render_file_listing(
    f: &mut Frame,
    area: Rect,
    rows: &[&DisplayFile],
    total: usize,
    selected: Option<usize>,
    view_mode: ViewMode,
    connection_state: &ConnectionState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(listing_title(rows.len(), total, view_mode))
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            empty_message(connection_state, total),
            Style::default().fg(Color::Gray),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let highlight = Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    match view_mode {
        ViewMode::Table => {
            let header = Row::new(vec!["Name", "Size", "Created at", "Modified at"]).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );

            let table_rows = rows.iter().map(|file| {
                Row::new(vec![
                    file.name.clone(),
                    file.size.clone(),
                    file.created_at.clone(),
                    file.modified_at.clone(),
                ])
            });

            let widths = [
                Constraint::Min(20),
                Constraint::Length(16),
                Constraint::Length(24),
                Constraint::Length(24),
            ];

            let table = Table::new(table_rows, widths)
                .header(header)
                .block(block)
                .row_highlight_style(highlight)
                .highlight_symbol(HIGHLIGHT_SYMBOL);

            let mut state = TableState::default().with_selected(selected);
            f.render_stateful_widget(table, area, &mut state);
        }

        ViewMode::List => {
            // Leave room for borders, highlight symbol and "  (size)" suffix
            let name_width = (area.width as usize).saturating_sub(4 + HIGHLIGHT_SYMBOL.len());

            let items: Vec<ListItem> = rows
                .iter()
                .map(|file| {
                    let suffix = format!("  ({} bytes)", file.size);
                    let name = truncate_to_width(
                        &file.name,
                        name_width.saturating_sub(suffix.len()),
                    );
                    ListItem::new(Line::from(vec![
                        Span::raw(name),
                        Span::styled(suffix, Style::default().fg(Color::Gray)),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(highlight)
                .highlight_symbol(HIGHLIGHT_SYMBOL);

            let mut state = ListState::default().with_selected(selected);
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}
