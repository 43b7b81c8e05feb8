//! HTTP error mapping.
//!
//! Every pipeline failure is caught at this boundary and turned into an
//! HTTP status plus a JSON body with at least an `error` field. Diagnostic
//! detail (raw upstream body, provider code) is included when available —
//! never dropped, never rewritten into success semantics.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use educator_llm::ProxyError;
use educator_records::StoreError;

/// Request-boundary error. Wraps the pipeline error taxonomies and carries
/// the mapping to HTTP.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Chat-proxy pipeline failure.
    #[error(transparent)]
    Proxy(#[from] ProxyError),

    /// Record store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Proxy(ProxyError::InvalidInput { message }) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            Self::Proxy(ProxyError::MalformedResponse { body }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "failed to process the provider response",
                    "details": body,
                }),
            ),
            // Upstream status passthrough
            Self::Proxy(ProxyError::Upstream {
                status,
                message,
                code,
            }) => {
                let http = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let mut body = json!({ "error": message, "status": status });
                if let Some(code) = code {
                    body["code"] = code.into();
                }
                (http, body)
            }
            Self::Proxy(ProxyError::Transport(e)) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": "failed to reach the completion provider",
                    "message": e.to_string(),
                }),
            ),
            Self::Proxy(ProxyError::Internal { message }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "internal server error", "message": message }),
            ),
            Self::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "failed to access student records",
                    "message": e.to_string(),
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
