//! Upload step: path entry, validation feedback, upload status.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::session::SessionState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_ERROR, TEXT_DIM, TEXT_PRIMARY};
use crate::ui::upload::UploadFormState;

pub fn render(frame: &mut Frame<'_>, area: Rect, form: &UploadFormState, session: &SessionState) {
    let dim = Style::default().fg(TEXT_DIM);
    let text = Style::default().fg(TEXT_PRIMARY);
    let busy = form.uploading || session.loading;

    let mut input_spans = vec![
        Span::styled("> ", dim),
        Span::styled(form.input.clone(), text),
    ];
    if !busy {
        input_spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
    }

    let mut lines = vec![
        Line::from(Span::styled("Path to a PDF resume:", dim)),
        Line::from(input_spans),
        Line::from(""),
    ];

    match &form.selected {
        Some(path) => lines.push(Line::from(vec![
            Span::styled("Selected: ", dim),
            Span::styled(path.display().to_string(), text),
        ])),
        None => lines.push(Line::from(Span::styled("No file selected", dim))),
    }

    lines.push(Line::from(""));
    if form.uploading {
        lines.push(Line::from(Span::styled("Uploading…", text)));
    } else if session.loading {
        lines.push(Line::from(Span::styled("Extracting skills…", text)));
    } else if let Some(error) = form.error.as_deref().or(session.error.as_deref()) {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            "Upload Resume",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
