//! HTTP handlers for payment endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::payment::{
    PaymentsForEnrollmentHandler, PaymentsForEnrollmentQuery, RecordPaymentCommand,
    RecordPaymentHandler,
};
use crate::domain::foundation::EnrollmentId;

use super::dto::PaymentResponse;

/// POST /api/payments/:enrollment_id - Settle an enrollment fee
pub async fn record_payment(
    State(state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = RecordPaymentHandler::new(state.store)
        .handle(RecordPaymentCommand {
            enrollment_id: EnrollmentId::new(enrollment_id),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}

/// GET /api/payments/:enrollment_id - Ledger of one enrollment
pub async fn list_payments(
    State(state): State<AppState>,
    Path(enrollment_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let payments = PaymentsForEnrollmentHandler::new(state.store)
        .handle(PaymentsForEnrollmentQuery {
            enrollment_id: EnrollmentId::new(enrollment_id),
        })
        .await?;
    let response: Vec<PaymentResponse> = payments.into_iter().map(Into::into).collect();
    Ok(Json(response))
}
