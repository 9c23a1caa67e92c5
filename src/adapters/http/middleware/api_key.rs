//! Shared-secret API-key middleware.
//!
//! Every API route requires the `X-Api-Key` header to match the configured
//! secret. The comparison is constant-time so response timing leaks nothing
//! about the key.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use tracing::warn;

use crate::adapters::http::ErrorResponse;
use crate::config::AuthConfig;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Rejects requests whose `X-Api-Key` header is missing or wrong.
pub async fn api_key_middleware(
    State(auth): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if auth.verify(key) => next.run(request).await,
        _ => {
            warn!(path = %request.uri().path(), "Rejected request without a valid API key");
            let body = ErrorResponse::new("UNAUTHORIZED", "Missing or invalid API key");
            (StatusCode::UNAUTHORIZED, Json(body)).into_response()
        }
    }
}
