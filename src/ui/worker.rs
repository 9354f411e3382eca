//! API worker: executes service calls off the UI thread.
//!
//! One task consumes commands in order, so at most one call is in flight
//! at a time; the linear step flow never needs more.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::UploadResponse;
use crate::ui::events::{ApiOutcome, AppEvent};

/// Requests the UI issues to the worker.
#[derive(Debug)]
pub enum ApiCommand {
    Upload { path: PathBuf },
    ExtractSkills { resume_id: i64 },
    Match { resume_id: i64, job_description: String },
}

pub type ApiCommandSender = UnboundedSender<ApiCommand>;

/// Spawn the worker task on the given runtime.
pub fn spawn(handle: &Handle, client: ApiClient, events: Sender<AppEvent>) -> ApiCommandSender {
    let (tx, mut rx) = mpsc::unbounded_channel();

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            let outcome = run_command(&client, command).await;
            log_outcome(&outcome);
            if events.send(AppEvent::Api(outcome)).is_err() {
                break;
            }
        }
    });

    tx
}

async fn run_command(client: &ApiClient, command: ApiCommand) -> ApiOutcome {
    match command {
        ApiCommand::Upload { path } => ApiOutcome::Upload(upload(client, &path).await),
        ApiCommand::ExtractSkills { resume_id } => {
            debug!(resume_id, "requesting skill extraction");
            ApiOutcome::Skills(client.extract_skills(resume_id).await)
        }
        ApiCommand::Match {
            resume_id,
            job_description,
        } => {
            debug!(resume_id, "requesting match");
            ApiOutcome::Match(client.match_resume(resume_id, &job_description).await)
        }
    }
}

async fn upload(client: &ApiClient, path: &Path) -> Result<UploadResponse, ApiError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ApiError::File {
            path: path.to_path_buf(),
            source,
        })?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume.pdf");
    debug!(filename, bytes = bytes.len(), "uploading resume");
    client.upload_resume(filename, bytes).await
}

fn log_outcome(outcome: &ApiOutcome) {
    let error = match outcome {
        ApiOutcome::Upload(Err(err)) => Some(("upload", err)),
        ApiOutcome::Skills(Err(err)) => Some(("extract-skills", err)),
        ApiOutcome::Match(Err(err)) => Some(("match", err)),
        _ => None,
    };
    if let Some((operation, err)) = error {
        warn!(operation, error = %err, "service call failed");
    }
}
