//! HTTP handlers for course endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::course::{
    DeleteCourseCommand, DeleteCourseHandler, GetCourseHandler, GetCourseQuery,
    ListCoursesHandler, RegisterCourseCommand, RegisterCourseHandler, UpdateCourseCommand,
    UpdateCourseHandler,
};
use crate::domain::foundation::CourseId;

use super::dto::{CourseRequest, CourseResponse};

/// GET /api/courses - List all courses
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let courses = ListCoursesHandler::new(state.store).handle().await?;
    let response: Vec<CourseResponse> = courses.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// GET /api/courses/:id - Get one course
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let course = GetCourseHandler::new(state.store)
        .handle(GetCourseQuery {
            course_id: CourseId::new(id),
        })
        .await?;
    Ok(Json(CourseResponse::from(course)))
}

/// POST /api/courses - Open a course
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (start, end) = (request.start(), request.end());
    let course = RegisterCourseHandler::new(state.store)
        .handle(RegisterCourseCommand {
            name: request.name,
            registration_fee: request.registration_fee,
            start_date: start,
            end_date: end,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// PUT /api/courses/:id - Update a course
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (start, end) = (request.start(), request.end());
    let course = UpdateCourseHandler::new(state.store)
        .handle(UpdateCourseCommand {
            course_id: CourseId::new(id),
            name: request.name,
            registration_fee: request.registration_fee,
            start_date: start,
            end_date: end,
        })
        .await?;
    Ok(Json(CourseResponse::from(course)))
}

/// DELETE /api/courses/:id - Close a course
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteCourseHandler::new(state.store)
        .handle(DeleteCourseCommand {
            course_id: CourseId::new(id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
