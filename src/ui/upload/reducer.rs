//! Reducer for the upload form.

use std::path::PathBuf;

use crate::ui::mvi::Reducer;

use super::intent::UploadIntent;
use super::state::UploadFormState;

/// Shown when the typed path does not name a PDF. The suffix check is
/// case-sensitive and a client-side hint only; the service re-validates.
const PDF_REQUIRED: &str = "Only PDF files are allowed";

pub struct UploadReducer;

impl Reducer for UploadReducer {
    type State = UploadFormState;
    type Intent = UploadIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // While a request is in flight the form is inert except for its
        // completion intents.
        if state.uploading {
            match intent {
                UploadIntent::UploadFailed { message } => {
                    state.uploading = false;
                    state.error = Some(message);
                }
                UploadIntent::UploadAccepted => {
                    state.uploading = false;
                }
                _ => {}
            }
            return state;
        }

        match intent {
            UploadIntent::Input(ch) => {
                state.input.push(ch);
            }
            UploadIntent::Paste(text) => {
                state.input.push_str(&text);
            }
            UploadIntent::Backspace => {
                state.input.pop();
            }
            UploadIntent::Select => {
                let path = state.input.trim();
                if path.is_empty() {
                    return state;
                }
                if !path.ends_with(".pdf") {
                    // Selection unchanged: a bad pick never clobbers a good one.
                    state.error = Some(PDF_REQUIRED.to_string());
                    return state;
                }
                state.selected = Some(PathBuf::from(path));
                state.error = None;
            }
            UploadIntent::UploadStarted => {
                if state.selected.is_some() {
                    state.uploading = true;
                    state.error = None;
                }
            }
            UploadIntent::UploadFailed { message } => {
                state.error = Some(message);
            }
            UploadIntent::UploadAccepted => {}
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: &str) -> UploadFormState {
        UploadFormState {
            input: input.to_string(),
            ..UploadFormState::default()
        }
    }

    #[test]
    fn selecting_a_pdf_stores_it_and_clears_error() {
        let mut state = typed("resume.pdf");
        state.error = Some("stale".to_string());

        let state = UploadReducer::reduce(state, UploadIntent::Select);
        assert_eq!(state.selected, Some(PathBuf::from("resume.pdf")));
        assert!(state.error.is_none());
    }

    #[test]
    fn selecting_a_docx_sets_error_and_keeps_prior_selection() {
        let mut state = typed("report.docx");
        state.selected = Some(PathBuf::from("earlier.pdf"));

        let state = UploadReducer::reduce(state, UploadIntent::Select);
        assert_eq!(state.selected, Some(PathBuf::from("earlier.pdf")));
        assert_eq!(state.error.as_deref(), Some(PDF_REQUIRED));
    }

    #[test]
    fn suffix_check_is_case_sensitive() {
        let state = UploadReducer::reduce(typed("resume.PDF"), UploadIntent::Select);
        assert!(state.selected.is_none());
        assert!(state.error.is_some());
    }

    #[test]
    fn empty_input_select_is_noop() {
        let state = UploadReducer::reduce(typed("   "), UploadIntent::Select);
        assert!(state.selected.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn typed_path_is_trimmed_on_select() {
        let state = UploadReducer::reduce(typed("  resume.pdf  "), UploadIntent::Select);
        assert_eq!(state.selected, Some(PathBuf::from("resume.pdf")));
    }

    #[test]
    fn upload_started_requires_a_selection() {
        let state = UploadReducer::reduce(UploadFormState::default(), UploadIntent::UploadStarted);
        assert!(!state.uploading);

        let mut with_file = UploadFormState::default();
        with_file.selected = Some(PathBuf::from("resume.pdf"));
        let state = UploadReducer::reduce(with_file, UploadIntent::UploadStarted);
        assert!(state.uploading);
        assert!(!state.can_upload());
    }

    #[test]
    fn form_is_inert_while_uploading() {
        let mut state = typed("resume.pdf");
        state.selected = Some(PathBuf::from("resume.pdf"));
        state.uploading = true;

        let state = UploadReducer::reduce(state, UploadIntent::Input('x'));
        assert_eq!(state.input, "resume.pdf");

        let state = UploadReducer::reduce(state, UploadIntent::Select);
        assert!(state.uploading);
    }

    #[test]
    fn upload_failure_surfaces_message_and_re_enables_form() {
        let mut state = UploadFormState::default();
        state.selected = Some(PathBuf::from("resume.pdf"));
        state.uploading = true;

        let state = UploadReducer::reduce(
            state,
            UploadIntent::UploadFailed {
                message: "Only PDF files allowed".to_string(),
            },
        );
        assert!(!state.uploading);
        assert_eq!(state.error.as_deref(), Some("Only PDF files allowed"));
        assert!(state.can_upload());
    }

    #[test]
    fn upload_accepted_clears_busy_flag() {
        let mut state = UploadFormState::default();
        state.selected = Some(PathBuf::from("resume.pdf"));
        state.uploading = true;

        let state = UploadReducer::reduce(state, UploadIntent::UploadAccepted);
        assert!(!state.uploading);
        assert!(state.error.is_none());
    }

    #[test]
    fn paste_appends_to_input() {
        let state = UploadReducer::reduce(typed("~/cv/"), UploadIntent::Paste("resume.pdf".into()));
        assert_eq!(state.input, "~/cv/resume.pdf");
    }
}
