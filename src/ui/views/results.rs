//! Match step: score, explanation, and skill breakdown.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::MatchResponse;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, STATUS_ERROR, STATUS_OK, STATUS_WARN, TEXT_DIM, TEXT_PRIMARY,
};

/// Three-tier color classification for the match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    /// ≥75 high, ≥50 medium, else low. Boundaries inclusive.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 75.0 {
            ScoreTier::High
        } else if percentage >= 50.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn color(self) -> Color {
        match self {
            ScoreTier::High => STATUS_OK,
            ScoreTier::Medium => STATUS_WARN,
            ScoreTier::Low => STATUS_ERROR,
        }
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, result: &MatchResponse) {
    let tier = ScoreTier::classify(result.match_percentage);
    let text = Style::default().fg(TEXT_PRIMARY);
    let dim = Style::default().fg(TEXT_DIM);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:.0}%", result.match_percentage),
                Style::default()
                    .fg(tier.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Match Score", dim),
        ]),
        Line::from(""),
        Line::from(Span::styled(result.explanation.clone(), text)),
        Line::from(""),
    ];

    if !result.matched_skills.is_empty() {
        push_tag_group(
            &mut lines,
            format!("Matched Skills ({})", result.matched_skills.len()),
            &result.matched_skills,
            STATUS_OK,
        );
    }
    if !result.missing_skills.is_empty() {
        push_tag_group(
            &mut lines,
            format!("Missing Skills ({})", result.missing_skills.len()),
            &result.missing_skills,
            STATUS_ERROR,
        );
    }

    let block = Block::default()
        .title(Span::styled(
            "Match Analysis",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn push_tag_group(lines: &mut Vec<Line<'_>>, title: String, skills: &[String], color: Color) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    let mut tags = Vec::with_capacity(skills.len() * 2);
    for skill in skills {
        tags.push(Span::styled(
            format!("[{skill}]"),
            Style::default().fg(color),
        ));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(""));
}
