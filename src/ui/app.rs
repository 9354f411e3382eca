//! Root state holder and side-effect seam.
//!
//! `App` owns the session plus the two form states and is the only writer.
//! State changes go through reducers; the intents that need network work
//! also enqueue a command for the API worker.

use crate::ui::events::ApiOutcome;
use crate::ui::job::{JobFormState, JobIntent, JobReducer};
use crate::ui::mvi::Reducer;
use crate::ui::session::{SessionIntent, SessionReducer, SessionState, Step};
use crate::ui::upload::{UploadFormState, UploadIntent, UploadReducer};
use crate::ui::worker::{ApiCommand, ApiCommandSender};

/// Generic MVI dispatch: takes current state, runs the reducer, stores the
/// result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    session: SessionState,
    upload_form: UploadFormState,
    job_form: JobFormState,
    api_tx: Option<ApiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            session: SessionState::default(),
            upload_form: UploadFormState::default(),
            job_form: JobFormState::default(),
            api_tx: None,
        }
    }

    /// Attach the worker channel. Without one (unit tests), commands are
    /// dropped silently.
    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_tx = Some(sender);
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn upload_form(&self) -> &UploadFormState {
        &self.upload_form
    }

    pub fn job_form(&self) -> &JobFormState {
        &self.job_form
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // --- upload step -----------------------------------------------------

    pub fn type_path(&mut self, ch: char) {
        dispatch_mvi!(self, upload_form, UploadReducer, UploadIntent::Input(ch));
    }

    pub fn backspace_path(&mut self) {
        dispatch_mvi!(self, upload_form, UploadReducer, UploadIntent::Backspace);
    }

    pub fn select_file(&mut self) {
        dispatch_mvi!(self, upload_form, UploadReducer, UploadIntent::Select);
    }

    /// Start the upload for the validated selection. Refused while a
    /// request is in flight or nothing is selected.
    pub fn start_upload(&mut self) {
        if !self.upload_form.can_upload() || self.session.loading {
            return;
        }
        let Some(path) = self.upload_form.selected.clone() else {
            return;
        };
        dispatch_mvi!(self, upload_form, UploadReducer, UploadIntent::UploadStarted);
        self.send_command(ApiCommand::Upload { path });
    }

    // --- skills step -----------------------------------------------------

    pub fn type_job(&mut self, ch: char) {
        dispatch_mvi!(self, job_form, JobReducer, JobIntent::Input(ch));
    }

    pub fn newline_job(&mut self) {
        dispatch_mvi!(self, job_form, JobReducer, JobIntent::Newline);
    }

    pub fn backspace_job(&mut self) {
        dispatch_mvi!(self, job_form, JobReducer, JobIntent::Backspace);
    }

    /// Request a match for the stored resume. The description is sent raw;
    /// only the emptiness guard trims.
    pub fn submit_match(&mut self) {
        if !self.job_form.can_submit(self.session.loading) {
            return;
        }
        if !matches!(self.session.step, Step::Skills { .. }) {
            return;
        }
        let Some(resume_id) = self.session.resume().map(|resume| resume.id) else {
            return;
        };
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::MatchRequested);
        self.send_command(ApiCommand::Match {
            resume_id,
            job_description: self.job_form.text.clone(),
        });
    }

    // --- any step --------------------------------------------------------

    /// Route pasted text to whichever input the current step shows.
    pub fn on_paste(&mut self, text: &str) {
        match self.session.step {
            Step::Upload { .. } => {
                dispatch_mvi!(
                    self,
                    upload_form,
                    UploadReducer,
                    UploadIntent::Paste(text.to_string())
                );
            }
            Step::Skills { .. } => {
                dispatch_mvi!(
                    self,
                    job_form,
                    JobReducer,
                    JobIntent::Paste(text.to_string())
                );
            }
            Step::Match { .. } => {}
        }
    }

    /// Discard the whole flow and return to the upload step.
    pub fn reset(&mut self) {
        dispatch_mvi!(self, session, SessionReducer, SessionIntent::Reset);
        self.upload_form = UploadFormState::default();
        self.job_form = JobFormState::default();
    }

    /// Fold an API completion into state and issue any follow-up request.
    pub fn on_api_outcome(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::Upload(Ok(response)) => {
                dispatch_mvi!(self, upload_form, UploadReducer, UploadIntent::UploadAccepted);
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::UploadFinished {
                        resume_id: response.id,
                        filename: response.filename,
                    }
                );
                // The upload success handler chains straight into skill
                // extraction; the skills step appears only once both land.
                self.send_command(ApiCommand::ExtractSkills {
                    resume_id: response.id,
                });
            }
            ApiOutcome::Upload(Err(err)) => {
                dispatch_mvi!(
                    self,
                    upload_form,
                    UploadReducer,
                    UploadIntent::UploadFailed {
                        message: err.display_message("Upload failed"),
                    }
                );
            }
            ApiOutcome::Skills(Ok(response)) => {
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::SkillsLoaded {
                        skills: response.skills,
                    }
                );
            }
            ApiOutcome::Skills(Err(err)) => {
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::RequestFailed {
                        message: err.display_message("Skill extraction failed"),
                    }
                );
            }
            ApiOutcome::Match(Ok(result)) => {
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::MatchLoaded { result }
                );
            }
            ApiOutcome::Match(Err(err)) => {
                dispatch_mvi!(
                    self,
                    session,
                    SessionReducer,
                    SessionIntent::RequestFailed {
                        message: err.display_message("Match failed"),
                    }
                );
            }
        }
    }

    fn send_command(&mut self, command: ApiCommand) {
        let Some(tx) = &self.api_tx else {
            return;
        };
        if tx.send(command).is_err() {
            dispatch_mvi!(
                self,
                session,
                SessionReducer,
                SessionIntent::RequestFailed {
                    message: "Service worker is gone".to_string(),
                }
            );
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
