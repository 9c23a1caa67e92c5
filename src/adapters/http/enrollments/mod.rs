//! Enrollment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CourseRosterResponse, EnrolledCourseResponse, EnrolledStudentResponse, EnrollmentRequest,
    EnrollmentResponse, EnrollmentSummaryResponse, EnrollmentWithPaymentResponse, ExistsResponse,
    StudentEnrollmentsResponse, UpdateEnrollmentRequest,
};
pub use routes::routes;
