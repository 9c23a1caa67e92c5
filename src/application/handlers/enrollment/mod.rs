//! Enrollment workflow handlers.

mod delete_enrollment;
mod enrollments_by_course;
mod enrollments_by_student;
mod is_enrolled;
mod list_enrollments;
mod register_enrollment;
mod register_enrollment_with_payment;
mod update_enrollment;

pub use delete_enrollment::{DeleteEnrollmentCommand, DeleteEnrollmentHandler};
pub use enrollments_by_course::{
    CourseRoster, EnrolledStudent, EnrollmentsByCourseHandler, EnrollmentsByCourseQuery,
};
pub use enrollments_by_student::{
    EnrolledCourse, EnrollmentsByStudentHandler, EnrollmentsByStudentQuery, StudentEnrollments,
};
pub use is_enrolled::{IsEnrolledHandler, IsEnrolledQuery};
pub use list_enrollments::{EnrollmentSummary, ListEnrollmentsHandler};
pub use register_enrollment::{RegisterEnrollmentCommand, RegisterEnrollmentHandler};
pub use register_enrollment_with_payment::{
    RegisterEnrollmentWithPaymentCommand, RegisterEnrollmentWithPaymentHandler,
    RegisterEnrollmentWithPaymentResult,
};
pub use update_enrollment::{UpdateEnrollmentCommand, UpdateEnrollmentHandler};
