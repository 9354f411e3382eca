//! HTTP gateway to the resume-analysis service.
//!
//! Three operations, each a single request/response round trip: no retry,
//! no caching. One `reqwest::Client` is shared across all calls.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{MatchRequest, MatchResponse, SkillsResponse, UploadResponse};
use crate::config::ApiConfig;

/// FastAPI-style error payload.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a resume as the multipart field `file`.
    pub async fn upload_resume(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_owned())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("/upload-resume/"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Request skill extraction for a stored resume. Empty request body.
    pub async fn extract_skills(&self, resume_id: i64) -> Result<SkillsResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint(&format!("/extract-skills/{resume_id}/")))
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Score the stored resume against a job description.
    pub async fn match_resume(
        &self,
        resume_id: i64,
        job_description: &str,
    ) -> Result<MatchResponse, ApiError> {
        let body = MatchRequest {
            resume_id,
            job_description: job_description.to_owned(),
        };
        let response = self
            .client
            .post(self.endpoint("/match"))
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(Self::service_error(status, body))
    }

    /// Extract a display message from a non-success response: structured
    /// `{"detail": ...}` payload first, then raw body, then the status line.
    fn service_error(status: StatusCode, body: String) -> ApiError {
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.detail,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => status.to_string(),
        };
        ApiError::Service {
            status: status.as_u16(),
            message,
        }
    }
}
