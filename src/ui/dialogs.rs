use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Center a `width` x `height` box inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render the "choose a file to upload" path prompt
pub fn render_path_prompt(f: &mut Frame, input: &str) {
    let prompt_area = centered_rect(f.area(), 70, 7);

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let text = vec![
        Line::from("Path of the file to upload (~ for home):"),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(input),
            Span::styled("█", cursor_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to select, Esc to cancel",
            Style::default().fg(Color::Gray),
        )),
    ];

    let prompt = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Choose File")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
