//! Skills step, right column: the job description editor.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::job::JobFormState;
use crate::ui::session::SessionState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_ERROR, TEXT_DIM, TEXT_PRIMARY};

pub fn render(frame: &mut Frame<'_>, area: Rect, form: &JobFormState, session: &SessionState) {
    let text = Style::default().fg(TEXT_PRIMARY);
    let dim = Style::default().fg(TEXT_DIM);

    let mut lines: Vec<Line> = if form.text.is_empty() {
        vec![Line::from(Span::styled(
            "Paste the job description here…",
            dim,
        ))]
    } else {
        form.text
            .split('\n')
            .map(|row| Line::from(Span::styled(row.to_string(), text)))
            .collect()
    };

    if !session.loading && !form.text.is_empty() {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▌", Style::default().fg(ACCENT)));
        }
    }

    lines.push(Line::from(""));
    if session.loading {
        lines.push(Line::from(Span::styled("Analyzing…", text)));
    } else if let Some(error) = session.error.as_deref() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    } else if !form.can_submit(session.loading) {
        lines.push(Line::from(Span::styled(
            "Type or paste a job description to enable matching",
            dim,
        )));
    }

    let block = Block::default()
        .title(Span::styled(
            "Job Description",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
