//! HTTP handlers for student endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::student::{
    DeleteStudentCommand, DeleteStudentHandler, GetStudentHandler, GetStudentQuery,
    ListStudentsHandler, RegisterStudentCommand, RegisterStudentHandler, UpdateStudentCommand,
    UpdateStudentHandler,
};
use crate::domain::foundation::StudentId;

use super::dto::{StudentRequest, StudentResponse};

/// GET /api/students - List all students
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let students = ListStudentsHandler::new(state.store).handle().await?;
    let response: Vec<StudentResponse> = students.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// GET /api/students/:id - Get one student
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let student = GetStudentHandler::new(state.store)
        .handle(GetStudentQuery {
            student_id: StudentId::new(id),
        })
        .await?;
    Ok(Json(StudentResponse::from(student)))
}

/// POST /api/students - Register a student
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<StudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let student = RegisterStudentHandler::new(state.store)
        .handle(RegisterStudentCommand {
            name: request.name,
            last_name: request.last_name,
            age: request.age,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

/// PUT /api/students/:id - Update a student
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<StudentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let student = UpdateStudentHandler::new(state.store)
        .handle(UpdateStudentCommand {
            student_id: StudentId::new(id),
            name: request.name,
            last_name: request.last_name,
            age: request.age,
        })
        .await?;
    Ok(Json(StudentResponse::from(student)))
}

/// DELETE /api/students/:id - Remove a student
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteStudentHandler::new(state.store)
        .handle(DeleteStudentCommand {
            student_id: StudentId::new(id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
