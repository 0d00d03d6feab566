use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the legend needs to know to pick its hotkeys
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendState {
    pub vim_mode: bool,
    pub prompt_open: bool,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub can_submit: bool,
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(state: LegendState) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if state.prompt_open {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Select File  "),
            key("Esc"),
            Span::raw(":Cancel"),
        ]);
        return hotkey_spans;
    }

    if state.search_mode {
        hotkey_spans.extend(vec![
            key("Enter"),
            Span::raw(":Apply Filter  "),
            key("Esc"),
            Span::raw(":Exit Search"),
        ]);
        return hotkey_spans;
    }

    if state.vim_mode {
        hotkey_spans.extend(vec![key("jk"), Span::raw(":Nav  "), key("gg/G"), Span::raw(":First/Last  ")]);
    } else {
        hotkey_spans.extend(vec![key("↑/↓"), Span::raw(":Nav  "), key("Home/End"), Span::raw(":First/Last  ")]);
    }

    hotkey_spans.extend(vec![key("o"), Span::raw(":Choose File  ")]);

    // Submit - only offered when a file is staged and nothing is uploading
    if state.can_submit {
        hotkey_spans.extend(vec![key("s"), Span::raw(":Upload  ")]);
    }

    hotkey_spans.extend(vec![key("v"), Span::raw(":Table/List  ")]);

    if state.has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if state.vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    // Quit - always available
    hotkey_spans.extend(vec![key("q"), Span::raw(":Quit")]);

    hotkey_spans
}

fn build_legend_paragraph(state: LegendState) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(state));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, state: LegendState) {
    f.render_widget(build_legend_paragraph(state), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, state: LegendState) -> u16 {
    // Count lines without the block; line_count() doesn't account for borders
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
