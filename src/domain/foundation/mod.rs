//! Shared value objects and error types for the domain layer.

mod errors;
mod ids;
mod timestamp;

pub use errors::{EntityKind, ErrorCode, RegistryError, ValidationError};
pub use ids::{CourseId, EnrollmentId, PaymentId, StudentId};
pub use timestamp::Timestamp;
