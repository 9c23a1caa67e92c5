//! Axum router for course endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::AppState;

use super::handlers::{create_course, delete_course, get_course, list_courses, update_course};

/// Course routes, mounted at `/api/courses`.
///
/// - `GET /` - List all courses
/// - `POST /` - Open a course
/// - `GET /:id` - Get one course
/// - `PUT /:id` - Update a course
/// - `DELETE /:id` - Close a course
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/:id",
            get(get_course).put(update_course).delete(delete_course),
        )
}
