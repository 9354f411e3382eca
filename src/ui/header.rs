use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT_DIM, TEXT_PRIMARY};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, step_label: &str) -> Paragraph<'static> {
        let separator_style = Style::default().fg(TEXT_DIM);
        let line = Line::from(vec![
            Span::styled(
                "  Resumatch",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("AI resume analysis", Style::default().fg(TEXT_PRIMARY)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("step: {step_label}"), Style::default().fg(TEXT_DIM)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
