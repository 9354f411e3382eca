//! Intents for the upload form.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UploadIntent {
    /// A character typed into the path input.
    Input(char),
    /// Text pasted into the path input.
    Paste(String),
    Backspace,

    /// Validate the typed path and store it as the selection.
    Select,

    /// An upload request was issued for the current selection.
    UploadStarted,

    /// The upload request failed; `message` is already human-readable.
    UploadFailed { message: String },

    /// The service accepted the upload; the session takes over from here.
    UploadAccepted,
}

impl Intent for UploadIntent {}
