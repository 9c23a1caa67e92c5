//! Axum router for enrollment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::AppState;

use super::handlers::{
    create_enrollment, create_enrollment_with_payment, delete_enrollment, enrollments_by_course,
    enrollments_by_student, is_enrolled, list_enrollments, update_enrollment,
};

/// Enrollment routes, mounted at `/api/enrollments`.
///
/// - `GET /` - Overview with resolved names
/// - `POST /` - Register without payment
/// - `POST /with-payment` - Register and pay atomically
/// - `PUT /:id` - Repoint an enrollment
/// - `DELETE /:id` - Cancel an enrollment
/// - `GET /student/:id` - All enrollments of one student
/// - `GET /course/:id` - Paid roster of one course
/// - `GET /exists/student/:sid/course/:cid` - Confirmed-seat check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/with-payment", post(create_enrollment_with_payment))
        .route(
            "/:id",
            axum::routing::put(update_enrollment).delete(delete_enrollment),
        )
        .route("/student/:id", get(enrollments_by_student))
        .route("/course/:id", get(enrollments_by_course))
        .route("/exists/student/:sid/course/:cid", get(is_enrolled))
}
