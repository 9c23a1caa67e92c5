//! JSON request/response types for enrollment endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::payments::PaymentResponse;
use crate::application::handlers::enrollment::{CourseRoster, EnrollmentSummary, StudentEnrollments};
use crate::domain::foundation::Timestamp;
use crate::domain::Enrollment;

/// Body for registering an enrollment (with or without payment).
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
}

/// Body for repointing an enrollment. Carries no paid flag on purpose.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnrollmentRequest {
    pub student_id: i64,
    pub course_id: i64,
}

/// Enrollment as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub enrollment_date: Timestamp,
    pub last_update: Timestamp,
    pub is_fee_paid: bool,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            id: enrollment.id.get(),
            student_id: enrollment.student_id.get(),
            course_id: enrollment.course_id.get(),
            enrollment_date: enrollment.enrollment_date,
            last_update: enrollment.last_update,
            is_fee_paid: enrollment.is_fee_paid,
        }
    }
}

/// One row of the enrollment overview.
///
/// Names are null when the referenced student or course has been removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentSummaryResponse {
    #[serde(flatten)]
    pub enrollment: EnrollmentResponse,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
}

impl From<EnrollmentSummary> for EnrollmentSummaryResponse {
    fn from(summary: EnrollmentSummary) -> Self {
        Self {
            enrollment: summary.enrollment.into(),
            student_name: summary.student_name,
            course_name: summary.course_name,
        }
    }
}

/// A student's enrollment overview: who they are and which courses they
/// are in, paid or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEnrollmentsResponse {
    pub student_id: i64,
    pub full_name: String,
    pub courses: Vec<EnrolledCourseResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledCourseResponse {
    pub course_id: i64,
    pub course_name: String,
}

impl From<StudentEnrollments> for StudentEnrollmentsResponse {
    fn from(result: StudentEnrollments) -> Self {
        Self {
            student_id: result.student_id.get(),
            full_name: result.full_name,
            courses: result
                .courses
                .into_iter()
                .map(|c| EnrolledCourseResponse {
                    course_id: c.course_id.get(),
                    course_name: c.course_name,
                })
                .collect(),
        }
    }
}

/// A course's confirmed roster: fee-paid students only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRosterResponse {
    pub course_id: i64,
    pub course_name: String,
    pub students: Vec<EnrolledStudentResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledStudentResponse {
    pub student_id: i64,
    pub full_name: String,
    pub age: u8,
}

impl From<CourseRoster> for CourseRosterResponse {
    fn from(roster: CourseRoster) -> Self {
        Self {
            course_id: roster.course_id.get(),
            course_name: roster.course_name,
            students: roster
                .students
                .into_iter()
                .map(|s| EnrolledStudentResponse {
                    student_id: s.student_id.get(),
                    full_name: s.full_name,
                    age: s.age,
                })
                .collect(),
        }
    }
}

/// Response of the combined enroll-and-pay endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentWithPaymentResponse {
    pub enrollment: EnrollmentResponse,
    pub payment: PaymentResponse,
}

/// Response of the enrollment-exists check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub enrolled: bool,
}
