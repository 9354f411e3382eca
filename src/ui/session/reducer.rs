//! Reducer for the analysis session.

use crate::ui::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{SessionState, Step, UploadedResume};

/// Session state transitions.
///
/// The flow only ever moves forward (upload → skills → match); the single
/// way back is `Reset`. Failures clear the busy flag and surface a message
/// without changing the step, so the user is never left without feedback.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let SessionState {
            step,
            loading,
            error,
        } = state;

        match intent {
            SessionIntent::UploadFinished {
                resume_id,
                filename,
            } => match step {
                Step::Upload { .. } => SessionState {
                    step: Step::Upload {
                        pending: Some(UploadedResume {
                            id: resume_id,
                            filename,
                        }),
                    },
                    loading: true,
                    error: None,
                },
                other => SessionState {
                    step: other,
                    loading,
                    error,
                },
            },

            SessionIntent::SkillsLoaded { skills } => match step {
                Step::Upload {
                    pending: Some(resume),
                } => SessionState {
                    step: Step::Skills { resume, skills },
                    loading: false,
                    error: None,
                },
                other => SessionState {
                    step: other,
                    loading,
                    error,
                },
            },

            SessionIntent::MatchRequested => match step {
                step @ Step::Skills { .. } if !loading => SessionState {
                    step,
                    loading: true,
                    error: None,
                },
                other => SessionState {
                    step: other,
                    loading,
                    error,
                },
            },

            SessionIntent::MatchLoaded { result } => match step {
                Step::Skills { resume, skills } => SessionState {
                    step: Step::Match {
                        resume,
                        skills,
                        result,
                    },
                    loading: false,
                    error,
                },
                other => SessionState {
                    step: other,
                    loading,
                    error,
                },
            },

            SessionIntent::RequestFailed { message } => SessionState {
                step,
                loading: false,
                error: Some(message),
            },

            SessionIntent::Reset => SessionState::default(),
        }
    }
}
