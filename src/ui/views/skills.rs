//! Skills step, left column: the extracted skill list.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, STATUS_OK, TEXT_DIM, TEXT_PRIMARY};

pub fn render(frame: &mut Frame<'_>, area: Rect, filename: &str, skills: &[String]) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Resume: ", Style::default().fg(TEXT_DIM)),
            Span::styled(filename, Style::default().fg(TEXT_PRIMARY)),
        ]),
        Line::from(""),
    ];

    for skill in skills {
        lines.push(Line::from(vec![
            Span::styled("  ✔ ", Style::default().fg(STATUS_OK)),
            Span::styled(skill.as_str(), Style::default().fg(TEXT_PRIMARY)),
        ]));
    }

    let block = Block::default()
        .title(Span::styled(
            format!("Extracted Skills ({})", skills.len()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
