//! Ask handler: the HTTP face of the "Ask About Me" widget.
//!
//! Blank questions are short-circuited with `204 No Content` and never reach the resolver,
//! mirroring the page, which does nothing on an empty submit. Everything else is resolved
//! and the answer text is returned untouched (line breaks included).

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_core::Resolution;
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct AskRequest {
    pub(crate) question: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AskResponse {
    pub(crate) answer: &'static str,
    /// Matched topic name; `None` when the fallback help text was returned.
    pub(crate) topic: Option<&'static str>,
    pub(crate) matched: bool,
    pub(crate) request_id: String,
}

impl AskResponse {
    fn new(resolution: Resolution, request_id: String) -> Self {
        Self {
            answer: resolution.answer(),
            topic: resolution.topic_name(),
            matched: resolution.is_match(),
            request_id,
        }
    }
}

/// POST /api/v1/ask – resolves one question to one canned answer.
pub(crate) async fn ask(State(state): State<AppState>, Json(req): Json<AskRequest>) -> Response {
    if req.question.trim().is_empty() {
        tracing::debug!(target: "portfolio::ask", "blank question ignored");
        return StatusCode::NO_CONTENT.into_response();
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("ask", request_id = %request_id);
    let resolution = span.in_scope(|| {
        let resolution = state.resolver.resolve_topic(&req.question);
        match resolution.topic_name() {
            Some(topic) => tracing::info!(
                target: "portfolio::ask",
                topic,
                question_len = req.question.len(),
                "[Ask] matched topic"
            ),
            None => tracing::info!(
                target: "portfolio::ask",
                question_len = req.question.len(),
                "[Ask] no topic matched, returning fallback"
            ),
        }
        resolution
    });

    Json(AskResponse::new(resolution, request_id)).into_response()
}
