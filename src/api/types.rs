use serde::{Deserialize, Serialize};

/// Body returned by `POST /upload-resume/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub id: i64,
    pub filename: String,
    pub message: String,
}

/// Body returned by `POST /extract-skills/{id}/`. The service echoes the
/// resume id back alongside the ordered skill list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillsResponse {
    pub resume_id: i64,
    pub skills: Vec<String>,
}

/// Wire body for `POST /match`.
///
/// The service expects snake_case field names; this struct is the single
/// place the wire contract is spelled out, so field renames happen here and
/// nowhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRequest {
    pub resume_id: i64,
    pub job_description: String,
}

/// Body returned by `POST /match`. Immutable once received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResponse {
    /// 0–100, float on the wire.
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
}
