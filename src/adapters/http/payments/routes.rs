//! Axum router for payment endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{list_payments, record_payment};

/// Payment routes, mounted at `/api/payments`.
///
/// - `POST /:enrollment_id` - Settle an enrollment fee
/// - `GET /:enrollment_id` - Ledger of one enrollment
pub fn routes() -> Router<AppState> {
    Router::new().route("/:enrollment_id", get(list_payments).post(record_payment))
}
