//! Axum router for student endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{create_student, delete_student, get_student, list_students, update_student};

/// Student routes, mounted at `/api/students`.
///
/// - `GET /` - List all students
/// - `POST /` - Register a student
/// - `GET /:id` - Get one student
/// - `PUT /:id` - Update a student
/// - `DELETE /:id` - Remove a student
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}
