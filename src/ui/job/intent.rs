//! Intents for the job description form.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum JobIntent {
    /// A character typed into the description.
    Input(char),
    /// Text pasted into the description.
    Paste(String),
    Newline,
    Backspace,
}

impl Intent for JobIntent {}
