use resumatch::api::types::MatchResponse;
use resumatch::ui::mvi::Reducer;
use resumatch::ui::session::{SessionIntent, SessionReducer, SessionState, Step};

fn match_result() -> MatchResponse {
    MatchResponse {
        match_percentage: 82.0,
        matched_skills: vec!["Python".to_string()],
        missing_skills: vec!["Go".to_string()],
        explanation: "Strong match".to_string(),
    }
}

fn after_upload() -> SessionState {
    SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::UploadFinished {
            resume_id: 42,
            filename: "resume.pdf".to_string(),
        },
    )
}

fn on_skills_step() -> SessionState {
    SessionReducer::reduce(
        after_upload(),
        SessionIntent::SkillsLoaded {
            skills: vec!["Python".to_string(), "Rust".to_string()],
        },
    )
}

#[test]
fn upload_finished_records_pending_resume_and_sets_loading() {
    let state = after_upload();
    assert!(matches!(state.step, Step::Upload { pending: Some(_) }));
    assert_eq!(state.resume().map(|r| r.id), Some(42));
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn skills_loaded_transitions_to_skills_step() {
    let state = on_skills_step();
    match &state.step {
        Step::Skills { resume, skills } => {
            assert_eq!(resume.id, 42);
            assert_eq!(resume.filename, "resume.pdf");
            assert_eq!(skills.len(), 2);
        }
        other => panic!("expected skills step, got {other:?}"),
    }
    assert!(!state.loading);
}

#[test]
fn skills_loaded_without_pending_resume_is_noop() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::SkillsLoaded {
            skills: vec!["Python".to_string()],
        },
    );
    assert_eq!(state, SessionState::default());
}

#[test]
fn match_requested_sets_loading_on_skills_step() {
    let state = SessionReducer::reduce(on_skills_step(), SessionIntent::MatchRequested);
    assert!(state.loading);
    assert!(matches!(state.step, Step::Skills { .. }));
}

#[test]
fn match_requested_on_upload_step_is_noop() {
    let state = SessionReducer::reduce(SessionState::default(), SessionIntent::MatchRequested);
    assert_eq!(state, SessionState::default());
}

#[test]
fn match_requested_while_loading_is_noop() {
    let busy = SessionReducer::reduce(on_skills_step(), SessionIntent::MatchRequested);
    let again = SessionReducer::reduce(busy.clone(), SessionIntent::MatchRequested);
    assert_eq!(busy, again);
}

#[test]
fn match_requested_clears_previous_error() {
    let failed = SessionReducer::reduce(
        on_skills_step(),
        SessionIntent::RequestFailed {
            message: "Match failed".to_string(),
        },
    );
    let retried = SessionReducer::reduce(failed, SessionIntent::MatchRequested);
    assert!(retried.error.is_none());
    assert!(retried.loading);
}

#[test]
fn match_loaded_transitions_to_match_step() {
    let requested = SessionReducer::reduce(on_skills_step(), SessionIntent::MatchRequested);
    let state = SessionReducer::reduce(
        requested,
        SessionIntent::MatchLoaded {
            result: match_result(),
        },
    );
    match &state.step {
        Step::Match { resume, result, .. } => {
            assert_eq!(resume.id, 42);
            assert_eq!(result.match_percentage, 82.0);
        }
        other => panic!("expected match step, got {other:?}"),
    }
    assert!(!state.loading);
}

#[test]
fn match_loaded_on_upload_step_is_noop() {
    let state = SessionReducer::reduce(
        SessionState::default(),
        SessionIntent::MatchLoaded {
            result: match_result(),
        },
    );
    assert_eq!(state, SessionState::default());
}

#[test]
fn request_failed_clears_loading_and_keeps_step() {
    let state = SessionReducer::reduce(
        after_upload(),
        SessionIntent::RequestFailed {
            message: "Skill extraction failed".to_string(),
        },
    );
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Skill extraction failed"));
    // Still the upload step: the failure surfaces without a transition.
    assert!(matches!(state.step, Step::Upload { .. }));
}

#[test]
fn reset_returns_to_defaults_from_any_step() {
    let requested = SessionReducer::reduce(on_skills_step(), SessionIntent::MatchRequested);
    let matched = SessionReducer::reduce(
        requested,
        SessionIntent::MatchLoaded {
            result: match_result(),
        },
    );
    let state = SessionReducer::reduce(matched, SessionIntent::Reset);
    assert_eq!(state, SessionState::default());
    assert!(state.resume().is_none());
}

#[test]
fn flow_only_moves_forward() {
    // upload → skills → match, with labels matching each stop.
    let state = SessionState::default();
    assert_eq!(state.step_label(), "upload");

    let state = after_upload();
    assert_eq!(state.step_label(), "upload");

    let state = on_skills_step();
    assert_eq!(state.step_label(), "skills");

    let requested = SessionReducer::reduce(state, SessionIntent::MatchRequested);
    let state = SessionReducer::reduce(
        requested,
        SessionIntent::MatchLoaded {
            result: match_result(),
        },
    );
    assert_eq!(state.step_label(), "match");

    // No intent leads backwards; only reset does.
    let state = SessionReducer::reduce(
        state,
        SessionIntent::UploadFinished {
            resume_id: 7,
            filename: "other.pdf".to_string(),
        },
    );
    assert_eq!(state.step_label(), "match");
}
