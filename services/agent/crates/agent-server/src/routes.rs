//! REST routes. Each handler translates the request body and delegates to
//! the shared `Assistant`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use medic_cli::application::SilentReporter;
use medic_cli::domain::environment::EnvironmentReport;
use medic_cli::domain::updates::UpdateReport;
use medic_common::{
    AgentInfo, CheckRequest, DiagnoseRequest, DiagnoseResponse, FixRequest, FixResponse,
    capabilities,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{auth, rpc};

/// Build the full router: REST, JSON-RPC, auth, CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/capabilities", get(list_capabilities))
        .route("/agent-info", get(agent_info))
        .route("/diagnose", post(diagnose))
        .route("/fix", post(fix))
        .route("/check", post(check))
        .route("/update", post(update))
        .route("/mcp", post(rpc::handle))
        .route("/mcp/info", get(rpc::info))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": true,
            "message": self.to_string(),
            "code": "INVALID_BODY",
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Decode a JSON body. An empty body means "all defaults".
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "message": "medic host agent API",
        "version": state.version,
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "platform": state.assistant.platform().os_family,
    }))
}

async fn list_capabilities() -> Json<Value> {
    Json(json!({ "capabilities": capabilities() }))
}

async fn agent_info(State(state): State<Arc<AppState>>) -> Json<AgentInfo> {
    Json(AgentInfo::new(&state.version, &state.base_url))
}

async fn diagnose(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    let request: DiagnoseRequest = parse_body(&body)?;
    Ok(Json(state.assistant.diagnose(&request).await))
}

async fn fix(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<FixResponse>, ApiError> {
    let request: FixRequest = parse_body(&body)?;
    tracing::info!(
        issue_ids = ?request.issue_ids,
        auto_fix = request.auto_fix,
        "fix requested",
    );
    Ok(Json(state.assistant.fix(&request).await))
}

async fn check(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<EnvironmentReport>, ApiError> {
    let request: CheckRequest = parse_body(&body)?;
    Ok(Json(
        state
            .assistant
            .check_environment(&request, &SilentReporter)
            .await,
    ))
}

async fn update(State(state): State<Arc<AppState>>) -> Json<UpdateReport> {
    Json(state.assistant.check_updates().await)
}
