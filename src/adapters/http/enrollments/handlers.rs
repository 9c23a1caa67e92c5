//! HTTP handlers for enrollment endpoints.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::{ApiError, AppState};
use crate::application::handlers::enrollment::{
    DeleteEnrollmentCommand, DeleteEnrollmentHandler, EnrollmentsByCourseHandler,
    EnrollmentsByCourseQuery, EnrollmentsByStudentHandler, EnrollmentsByStudentQuery,
    IsEnrolledHandler, IsEnrolledQuery, ListEnrollmentsHandler, RegisterEnrollmentCommand,
    RegisterEnrollmentHandler, RegisterEnrollmentWithPaymentCommand,
    RegisterEnrollmentWithPaymentHandler, UpdateEnrollmentCommand, UpdateEnrollmentHandler,
};
use crate::domain::foundation::{CourseId, EnrollmentId, StudentId};

use super::dto::{
    CourseRosterResponse, EnrollmentRequest, EnrollmentResponse, EnrollmentSummaryResponse,
    EnrollmentWithPaymentResponse, ExistsResponse, StudentEnrollmentsResponse,
    UpdateEnrollmentRequest,
};

/// GET /api/enrollments - Overview of all enrollments with resolved names
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = ListEnrollmentsHandler::new(state.store).handle().await?;
    let response: Vec<EnrollmentSummaryResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// POST /api/enrollments - Register an enrollment without payment
pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(request): Json<EnrollmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let enrollment = RegisterEnrollmentHandler::new(state.store)
        .handle(RegisterEnrollmentCommand {
            student_id: StudentId::new(request.student_id),
            course_id: CourseId::new(request.course_id),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(EnrollmentResponse::from(enrollment))))
}

/// POST /api/enrollments/with-payment - Register and pay in one step
pub async fn create_enrollment_with_payment(
    State(state): State<AppState>,
    Json(request): Json<EnrollmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = RegisterEnrollmentWithPaymentHandler::new(state.store)
        .handle(RegisterEnrollmentWithPaymentCommand {
            student_id: StudentId::new(request.student_id),
            course_id: CourseId::new(request.course_id),
        })
        .await?;
    let response = EnrollmentWithPaymentResponse {
        enrollment: result.enrollment.into(),
        payment: result.payment.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/enrollments/:id - Repoint an enrollment
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateEnrollmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let enrollment = UpdateEnrollmentHandler::new(state.store)
        .handle(UpdateEnrollmentCommand {
            enrollment_id: EnrollmentId::new(id),
            student_id: StudentId::new(request.student_id),
            course_id: CourseId::new(request.course_id),
        })
        .await?;
    Ok(Json(EnrollmentResponse::from(enrollment)))
}

/// DELETE /api/enrollments/:id - Cancel an enrollment
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    DeleteEnrollmentHandler::new(state.store)
        .handle(DeleteEnrollmentCommand {
            enrollment_id: EnrollmentId::new(id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/enrollments/student/:id - All enrollments of one student
pub async fn enrollments_by_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let result = EnrollmentsByStudentHandler::new(state.store)
        .handle(EnrollmentsByStudentQuery {
            student_id: StudentId::new(id),
        })
        .await?;
    Ok(Json(StudentEnrollmentsResponse::from(result)))
}

/// GET /api/enrollments/course/:id - Paid roster of one course
pub async fn enrollments_by_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let roster = EnrollmentsByCourseHandler::new(state.store)
        .handle(EnrollmentsByCourseQuery {
            course_id: CourseId::new(id),
        })
        .await?;
    Ok(Json(CourseRosterResponse::from(roster)))
}

/// GET /api/enrollments/exists/student/:sid/course/:cid - Confirmed-seat check
pub async fn is_enrolled(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let enrolled = IsEnrolledHandler::new(state.store)
        .handle(IsEnrolledQuery {
            student_id: StudentId::new(student_id),
            course_id: CourseId::new(course_id),
        })
        .await?;
    Ok(Json(ExistsResponse { enrolled }))
}
