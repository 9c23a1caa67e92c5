//! Error types for the domain layer.

use rust_decimal::Decimal;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::Timestamp;

/// Errors that occur during entity construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Student must be an adult, got age {actual}")]
    Underage { actual: u8 },

    #[error("Registration fee cannot be negative, got {actual}")]
    NegativeFee { actual: Decimal },

    #[error("Course end date {end} precedes start date {start}")]
    EndBeforeStart { start: Timestamp, end: Timestamp },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Name of the offending field, for structured error responses.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::Underage { .. } => "age",
            ValidationError::NegativeFee { .. } => "registration_fee",
            ValidationError::EndBeforeStart { .. } => "end_date",
        }
    }
}

/// The kinds of record a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Course,
    Enrollment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Student => "student",
            EntityKind::Course => "course",
            EntityKind::Enrollment => "enrollment",
        };
        write!(f, "{}", s)
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    StudentNotFound,
    CourseNotFound,
    EnrollmentNotFound,

    // State errors
    Conflict,

    // Infrastructure errors
    StoreUnavailable,

    // Authorization errors
    Unauthorized,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::StudentNotFound => "STUDENT_NOT_FOUND",
            ErrorCode::CourseNotFound => "COURSE_NOT_FOUND",
            ErrorCode::EnrollmentNotFound => "ENROLLMENT_NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
        };
        write!(f, "{}", s)
    }
}

/// Failure taxonomy for every registry operation.
///
/// Callers match on the variant; the HTTP adapter maps variants onto status
/// codes.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// A referenced record does not exist.
    NotFound { entity: EntityKind, id: i64 },

    /// The request lost a concurrent race or repeats a one-shot action.
    Conflict { message: String },

    /// The input violates a domain invariant.
    Validation(ValidationError),

    /// The entity store could not complete the request.
    StoreUnavailable(String),
}

impl RegistryError {
    /// Creates a not-found error for the given entity kind and raw id.
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        RegistryError::NotFound { entity, id }
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        RegistryError::Conflict { message: message.into() }
    }

    /// Creates a store-unavailable error.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        RegistryError::StoreUnavailable(message.into())
    }

    /// The stable code reported to API clients.
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::NotFound { entity, .. } => match entity {
                EntityKind::Student => ErrorCode::StudentNotFound,
                EntityKind::Course => ErrorCode::CourseNotFound,
                EntityKind::Enrollment => ErrorCode::EnrollmentNotFound,
            },
            RegistryError::Conflict { .. } => ErrorCode::Conflict,
            RegistryError::Validation(_) => ErrorCode::ValidationFailed,
            RegistryError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::NotFound { entity, id } => {
                write!(f, "[{}] No {} with id {}", self.code(), entity, id)
            }
            RegistryError::Conflict { message } => write!(f, "[{}] {}", self.code(), message),
            RegistryError::Validation(err) => write!(f, "[{}] {}", self.code(), err),
            RegistryError::StoreUnavailable(message) => {
                write!(f, "[{}] {}", self.code(), message)
            }
        }
    }
}

impl Error for RegistryError {}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        RegistryError::Validation(err)
    }
}
