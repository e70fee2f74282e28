//! JSON-RPC 2.0 endpoint at `/mcp`.
//!
//! Accepts a single call or a batch array. Envelope problems are answered
//! with the standard error codes; the HTTP status is always 200 once the
//! request reaches this handler.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use medic_cli::application::SilentReporter;
use medic_common::rpc::JSONRPC_VERSION;
use medic_common::{
    CheckRequest, DiagnoseRequest, FixRequest, RpcError, RpcRequest, RpcResponse,
    StatusResponse, capabilities, error_codes,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::state::AppState;

/// Every method this endpoint dispatches, in `/mcp/info` order.
pub const METHODS: &[&str] = &[
    "mcp.get_dev_info",
    "mcp.check_environment",
    "mcp.check_updates",
    "mcp.diagnose_issues",
    "mcp.fix_issues",
    "mcp.list_capabilities",
    "mcp.get_status",
];

#[derive(Debug, Error)]
enum CallError {
    #[error("Method '{0}' not found")]
    MethodNotFound(String),
    #[error("{0}")]
    InvalidParams(#[source] serde_json::Error),
    #[error("{0}")]
    Internal(#[source] serde_json::Error),
}

impl From<CallError> for RpcError {
    fn from(err: CallError) -> Self {
        let data = Some(err.to_string());
        match err {
            CallError::MethodNotFound(_) => {
                RpcError::new(error_codes::METHOD_NOT_FOUND, "Method not found", data)
            }
            CallError::InvalidParams(_) => {
                RpcError::new(error_codes::INVALID_PARAMS, "Invalid params", data)
            }
            CallError::Internal(_) => {
                RpcError::new(error_codes::INTERNAL_ERROR, "Internal error", data)
            }
        }
    }
}

fn invalid_request(id: Option<Value>, detail: &str) -> RpcResponse {
    RpcResponse::failure(
        id,
        RpcError::new(
            error_codes::INVALID_REQUEST,
            "Invalid Request",
            Some(detail.to_string()),
        ),
    )
}

/// `POST /mcp`
pub async fn handle(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            let error = RpcError::new(error_codes::PARSE_ERROR, "Parse error", Some(e.to_string()));
            return Json(RpcResponse::failure(None, error)).into_response();
        }
    };

    match payload {
        Value::Array(calls) if calls.is_empty() => {
            Json(invalid_request(None, "empty batch")).into_response()
        }
        Value::Array(calls) => {
            let mut responses = Vec::with_capacity(calls.len());
            for call in calls {
                responses.push(dispatch(&state, call).await);
            }
            Json(responses).into_response()
        }
        call => Json(dispatch(&state, call).await).into_response(),
    }
}

/// `GET /mcp/info`
pub async fn info(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "name": "medic",
        "version": state.version,
        "protocol": "json-rpc-2.0",
        "methods": METHODS,
    }))
}

async fn dispatch(state: &AppState, call: Value) -> RpcResponse {
    let id = call.get("id").cloned();
    let request: RpcRequest = match serde_json::from_value(call) {
        Ok(request) => request,
        Err(_) => return invalid_request(id, "request must be an object"),
    };

    if request.jsonrpc.as_deref() != Some(JSONRPC_VERSION) {
        return invalid_request(request.id, "jsonrpc must be '2.0'");
    }
    let Some(method) = request.method.as_deref() else {
        return invalid_request(request.id, "method is required");
    };
    let params = match request.params {
        None | Some(Value::Null) => json!({}),
        Some(params) => params,
    };

    tracing::debug!(method, "rpc call");
    match invoke(state, method, params).await {
        Ok(result) => RpcResponse::success(request.id, result),
        Err(err) => {
            tracing::warn!(method, error = %err, "rpc call failed");
            RpcResponse::failure(request.id, err.into())
        }
    }
}

async fn invoke(state: &AppState, method: &str, params: Value) -> Result<Value, CallError> {
    let assistant = &state.assistant;
    match method {
        "mcp.get_dev_info" => to_result(&assistant.dev_info().await),
        "mcp.check_environment" => {
            let request: CheckRequest = parse_params(params)?;
            to_result(&assistant.check_environment(&request, &SilentReporter).await)
        }
        "mcp.check_updates" => to_result(&assistant.check_updates().await),
        "mcp.diagnose_issues" => {
            let request: DiagnoseRequest = parse_params(params)?;
            to_result(&assistant.diagnose(&request).await)
        }
        "mcp.fix_issues" => {
            let request: FixRequest = parse_params(params)?;
            to_result(&assistant.fix(&request).await)
        }
        "mcp.list_capabilities" => Ok(json!({ "capabilities": capabilities() })),
        "mcp.get_status" => to_result(&StatusResponse::active(assistant.platform())),
        other => Err(CallError::MethodNotFound(other.to_string())),
    }
}

fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, CallError> {
    serde_json::from_value(params).map_err(CallError::InvalidParams)
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, CallError> {
    serde_json::to_value(value).map_err(CallError::Internal)
}
