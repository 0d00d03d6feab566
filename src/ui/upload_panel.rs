//! Pending Upload Panel
//!
//! Shows the staged file's details, or a hint when nothing is staged.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::UploadModel;

fn build_lines(upload: &UploadModel) -> Vec<Line<'_>> {
    let Some(pending) = upload.pending.as_ref() else {
        return vec![Line::from(Span::styled(
            "No file selected - press o to choose one",
            Style::default().fg(Color::Gray),
        ))];
    };

    let label = Style::default().fg(Color::Yellow);
    vec![
        Line::from(vec![Span::styled("Name: ", label), Span::raw(pending.name.as_str())]),
        Line::from(vec![Span::styled("Type: ", label), Span::raw(pending.mime_type.as_str())]),
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::raw(format!("{} bytes", pending.size_bytes)),
        ]),
    ]
}

pub fn render_upload_panel(f: &mut Frame, area: Rect, upload: &UploadModel) {
    let title = if upload.in_flight {
        Line::from(vec![
            Span::raw(" File to upload "),
            Span::styled(
                "(uploading...) ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(" File to upload ")
    };

    let border_color = if upload.pending.is_some() {
        Color::Green
    } else {
        Color::Gray
    };

    let panel = Paragraph::new(build_lines(upload)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );

    f.render_widget(panel, area);
}
