//! HTTP surface: axum routers, DTOs and middleware.

pub mod courses;
pub mod enrollments;
mod error;
pub mod middleware;
pub mod payments;
pub mod students;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AuthConfig;
use crate::ports::EntityStore;

pub use error::{ApiError, ErrorResponse};

/// Shared application state.
///
/// Cloned per request; the store is Arc-wrapped so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntityStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

/// Builds the complete API router.
///
/// Every route sits behind the API-key middleware; tracing, CORS and a
/// request timeout wrap the whole surface.
pub fn api_router(state: AppState, auth: Arc<AuthConfig>, request_timeout: Duration) -> Router {
    Router::new()
        .nest("/api/students", students::routes())
        .nest("/api/courses", courses::routes())
        .nest("/api/enrollments", enrollments::routes())
        .nest("/api/payments", payments::routes())
        .layer(axum::middleware::from_fn_with_state(
            auth,
            middleware::api_key_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
