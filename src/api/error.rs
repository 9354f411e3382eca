//! Error types for the service gateway.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the resume-analysis service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connect, timeout, or body decode.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// The selected resume could not be read from disk.
    #[error("Failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Human-readable message for inline display.
    ///
    /// Priority order: structured service payload, then the error's own
    /// display text, then the caller-supplied fallback literal.
    pub fn display_message(&self, fallback: &str) -> String {
        let message = match self {
            ApiError::Service { message, .. } => message.clone(),
            other => other.to_string(),
        };
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_wins() {
        let err = ApiError::Service {
            status: 400,
            message: "Only PDF files allowed".to_string(),
        };
        assert_eq!(err.display_message("Upload failed"), "Only PDF files allowed");
    }

    #[test]
    fn empty_service_message_falls_back_to_literal() {
        let err = ApiError::Service {
            status: 502,
            message: "  ".to_string(),
        };
        assert_eq!(err.display_message("Upload failed"), "Upload failed");
    }

    #[test]
    fn file_error_names_the_path() {
        let err = ApiError::File {
            path: PathBuf::from("/tmp/resume.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.display_message("Upload failed");
        assert!(message.contains("/tmp/resume.pdf"));
    }
}
