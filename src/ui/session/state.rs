//! State for the analysis session.

use crate::api::MatchResponse;
use crate::ui::mvi::UiState;

/// A resume the service has accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedResume {
    pub id: i64,
    pub filename: String,
}

/// The three-step analysis flow.
///
/// Each variant carries the data that must exist for the step to be shown,
/// so "skills only after a stored resume" and "match only with a result"
/// hold by construction instead of by cross-field checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Waiting for a resume. `pending` is set once an upload has been
    /// accepted and skill extraction is still in flight.
    Upload { pending: Option<UploadedResume> },

    /// Skills extracted; waiting for a job description.
    Skills {
        resume: UploadedResume,
        skills: Vec<String>,
    },

    /// Match computed.
    Match {
        resume: UploadedResume,
        skills: Vec<String>,
        result: MatchResponse,
    },
}

impl Default for Step {
    fn default() -> Self {
        Step::Upload { pending: None }
    }
}

/// The whole transient state of one analysis flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub step: Step,
    /// A skill-extraction or match request is in flight.
    pub loading: bool,
    /// Failure of the in-flight request, shown inline on the current step.
    pub error: Option<String>,
}

impl UiState for SessionState {}

impl SessionState {
    /// The stored resume, if any step of the flow has one.
    pub fn resume(&self) -> Option<&UploadedResume> {
        match &self.step {
            Step::Upload { pending } => pending.as_ref(),
            Step::Skills { resume, .. } | Step::Match { resume, .. } => Some(resume),
        }
    }

    pub fn step_label(&self) -> &'static str {
        match self.step {
            Step::Upload { .. } => "upload",
            Step::Skills { .. } => "skills",
            Step::Match { .. } => "match",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_upload_with_nothing_pending() {
        let state = SessionState::default();
        assert!(matches!(state.step, Step::Upload { pending: None }));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.resume().is_none());
    }

    #[test]
    fn resume_accessor_covers_every_step() {
        let resume = UploadedResume {
            id: 7,
            filename: "resume.pdf".to_string(),
        };
        let pending = SessionState {
            step: Step::Upload {
                pending: Some(resume.clone()),
            },
            ..SessionState::default()
        };
        assert_eq!(pending.resume().map(|r| r.id), Some(7));

        let skills = SessionState {
            step: Step::Skills {
                resume,
                skills: vec!["Rust".to_string()],
            },
            ..SessionState::default()
        };
        assert_eq!(skills.resume().map(|r| r.id), Some(7));
        assert_eq!(skills.step_label(), "skills");
    }
}
