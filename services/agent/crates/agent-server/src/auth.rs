//! Optional shared-key authentication.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use subtle::ConstantTimeEq;

use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths served without a key so that probes and discovery keep working.
const PUBLIC_PATHS: &[&str] = &["/", "/health"];

/// Reject requests whose `X-API-Key` does not match the configured key.
/// Passes everything through when no key is configured.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.api_key.as_deref() else {
        return next.run(request).await;
    };
    if PUBLIC_PATHS.contains(&request.uri().path()) {
        return next.run(request).await;
    }

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if provided.is_some_and(|key| key_matches(key, expected)) {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "rejected request with missing or invalid API key");
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": true,
            "message": "missing or invalid API key",
            "code": "UNAUTHORIZED",
        })),
    )
        .into_response()
}

/// Compare keys without short-circuiting on the first differing byte.
/// Only the length is allowed to leak.
fn key_matches(provided: &str, expected: &str) -> bool {
    if provided.len() != expected.len() {
        return false;
    }
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
