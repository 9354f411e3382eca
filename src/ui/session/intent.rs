//! Intents for the analysis session.

use crate::api::MatchResponse;
use crate::ui::mvi::Intent;

/// Intents consumed by the session reducer.
///
/// API completions arrive here as plain data; the app layer turns the
/// intents that need follow-up requests into worker commands.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// The service accepted the upload; skill extraction starts next.
    UploadFinished { resume_id: i64, filename: String },

    /// Skill extraction finished for the pending resume.
    SkillsLoaded { skills: Vec<String> },

    /// The user asked for a match. Valid only on the skills step while no
    /// request is in flight; a no-op everywhere else.
    MatchRequested,

    /// Match computation finished.
    MatchLoaded { result: MatchResponse },

    /// A skill-extraction or match request failed.
    RequestFailed { message: String },

    /// Discard everything and return to the upload step.
    Reset,
}

impl Intent for SessionIntent {}
