//! HTTP front-end: routing, shared-secret enforcement and the mapping
//! from upstream failure classes to response codes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use crate::api::jira::JiraClient;
use crate::auth;
use crate::models::issue::NormalizedIssue;

pub struct AppState {
    pub jira: JiraClient,
    pub api_key: String,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/issues/:key", get(get_issue))
        .with_state(state)
}

/// Load-balancer probe; deliberately outside the shared-secret check.
async fn health() -> Response {
    json_response(StatusCode::OK, &json!({ "ok": true }))
}

async fn get_issue(
    State(state): State<SharedState>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    let provided = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !auth::verify_api_key(provided, &state.api_key) {
        return ApiError::Unauthorized.into_response();
    }

    match state.jira.get_issue(&key).await {
        Ok(issue) => json_response(StatusCode::OK, &NormalizedIssue::from_upstream(&key, issue)),
        Err(err) if err.status() == Some(404) => ApiError::IssueNotFound(key).into_response(),
        Err(err) => {
            warn!(issue = %key, error = %err, "upstream Jira call failed");
            ApiError::Upstream.into_response()
        }
    }
}

/// Request-level failures and the responses they map to. Upstream status
/// codes and bodies stay out of client responses.
enum ApiError {
    Unauthorized,
    IssueNotFound(String),
    Upstream,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => json_response(
                StatusCode::UNAUTHORIZED,
                &json!({ "error": "Unauthorized" }),
            ),
            ApiError::IssueNotFound(key) => json_response(
                StatusCode::NOT_FOUND,
                &json!({ "error": "Issue not found", "key": key }),
            ),
            ApiError::Upstream => json_response(
                StatusCode::BAD_GATEWAY,
                &json!({ "error": "Error talking to Jira" }),
            ),
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(payload) => {
            (status, [(header::CONTENT_TYPE, "application/json")], payload).into_response()
        }
        Err(err) => {
            warn!(error = %err, "failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
