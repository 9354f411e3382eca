//! Mock resume-analysis service for client tests.

#![allow(dead_code)]

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub body: serde_json::Value,
}

/// A scriptable response for one operation.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl MockResponse {
    pub fn json(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    /// FastAPI-style error payload.
    pub fn error(status: u16, detail: &str) -> Self {
        Self {
            status,
            body: json!({ "detail": detail }),
        }
    }
}

struct Inner {
    upload: MockResponse,
    skills: MockResponse,
    matching: MockResponse,
    requests: Vec<CapturedRequest>,
}

#[derive(Clone)]
struct MockState {
    inner: Arc<Mutex<Inner>>,
}

pub struct MockService {
    pub base_url: String,
    state: MockState,
}

impl MockService {
    /// Happy-path service: upload returns id 42, extraction returns two
    /// skills, matching returns an 82% result.
    pub async fn spawn() -> Self {
        Self::spawn_with(
            MockResponse::json(json!({
                "id": 42,
                "filename": "resume.pdf",
                "message": "Resume uploaded successfully"
            })),
            MockResponse::json(json!({
                "resume_id": 42,
                "skills": ["Python", "Rust"]
            })),
            MockResponse::json(json!({
                "match_percentage": 82.0,
                "matched_skills": ["Python"],
                "missing_skills": ["Go"],
                "explanation": "Strong match"
            })),
        )
        .await
    }

    pub async fn spawn_with(
        upload: MockResponse,
        skills: MockResponse,
        matching: MockResponse,
    ) -> Self {
        let state = MockState {
            inner: Arc::new(Mutex::new(Inner {
                upload,
                skills,
                matching,
                requests: Vec::new(),
            })),
        };

        let router = Router::new()
            .route("/api/upload-resume/", post(upload_handler))
            .route("/api/extract-skills/{id}/", post(skills_handler))
            .route("/api/match", post(match_handler))
            .with_state(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url: format!("http://{addr}/api"),
            state,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state
            .inner
            .lock()
            .expect("mock state lock")
            .requests
            .clone()
    }
}

async fn upload_handler(State(state): State<MockState>, mut multipart: Multipart) -> Response {
    let mut filename = String::new();
    let mut file_bytes = 0usize;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            filename = field.file_name().unwrap_or_default().to_string();
            file_bytes = field.bytes().await.map(|bytes| bytes.len()).unwrap_or(0);
        }
    }

    let mut inner = state.inner.lock().expect("mock state lock");
    inner.requests.push(CapturedRequest {
        path: "/api/upload-resume/".to_string(),
        body: json!({ "filename": filename, "file_bytes": file_bytes }),
    });
    respond(&inner.upload)
}

async fn skills_handler(State(state): State<MockState>, Path(id): Path<i64>) -> Response {
    let mut inner = state.inner.lock().expect("mock state lock");
    inner.requests.push(CapturedRequest {
        path: format!("/api/extract-skills/{id}/"),
        body: json!(null),
    });
    respond(&inner.skills)
}

async fn match_handler(
    State(state): State<MockState>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let mut inner = state.inner.lock().expect("mock state lock");
    inner.requests.push(CapturedRequest {
        path: "/api/match".to_string(),
        body,
    });
    respond(&inner.matching)
}

fn respond(mock: &MockResponse) -> Response {
    let status = StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(mock.body.clone())).into_response()
}
