//! State for the job description form.

use crate::ui::mvi::UiState;

/// Free-text job description being edited on the skills step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobFormState {
    pub text: String,
}

impl UiState for JobFormState {}

impl JobFormState {
    /// Submit is available only with non-whitespace text and no request in
    /// flight. The submitted text itself stays raw; only the guard trims.
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.text.trim().is_empty()
    }
}
