//! Entity store port.
//!
//! The store is exposed as a session (unit-of-work) factory. A handler opens
//! one session per request, reads what it needs, buffers its writes, and
//! commits once; the commit applies every buffered write atomically or none
//! of them. Dropping a session without committing discards its writes.
//!
//! Reads always observe the last committed state. Writes buffered in a
//! session are not visible to reads, not even reads on the same session; the
//! materialized entities returned by the `insert_*` methods are the only
//! handles to pending records.
//!
//! # Concurrency
//!
//! Every versioned entity carries the record version it was read at. Updates
//! and deletes re-check that version at commit time; a mismatch fails the
//! whole session with [`StoreError::Conflict`] and the caller retries or
//! reports. Payments are insert-only and carry no version.
//!
//! # Example
//!
//! ```ignore
//! let mut session = store.session().await?;
//! let mut enrollment = session
//!     .find_enrollment(id)
//!     .await?
//!     .ok_or(RegistryError::not_found(EntityKind::Enrollment, id.get()))?;
//! enrollment.mark_fee_paid()?;
//! session.update_enrollment(enrollment);
//! session.commit().await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{
    CourseId, EnrollmentId, EntityKind, RegistryError, StudentId,
};
use crate::domain::{
    Course, Enrollment, NewCourse, NewEnrollment, NewPayment, NewStudent, Payment, Student,
};

/// Failures surfaced by the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A buffered write raced a concurrent commit, or targets a record that
    /// no longer exists.
    #[error("Concurrent modification of {entity} {id}")]
    Conflict { entity: EntityKind, id: i64 },

    /// The store could not serve the request at all.
    #[error("Entity store unavailable: {0}")]
    Unavailable(String),
}

impl From<StoreError> for RegistryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { entity, id } => {
                RegistryError::conflict(format!("Concurrent modification of {} {}", entity, id))
            }
            StoreError::Unavailable(message) => RegistryError::StoreUnavailable(message),
        }
    }
}

/// Session factory. The application layer's only view of persistence.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Opens a fresh unit of work over the current committed state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be reached.
    async fn session(&self) -> Result<Box<dyn StoreSession>, StoreError>;
}

/// One unit of work: committed-state reads plus buffered writes.
///
/// `insert_*` assigns the identity eagerly and returns the materialized
/// entity, so a later write in the same session can reference it (a payment
/// recorded against an enrollment inserted moments before).
#[async_trait]
pub trait StoreSession: Send {
    // Reads (committed state)

    async fn find_student(&self, id: StudentId) -> Result<Option<Student>, StoreError>;
    async fn find_course(&self, id: CourseId) -> Result<Option<Course>, StoreError>;
    async fn find_enrollment(&self, id: EnrollmentId) -> Result<Option<Enrollment>, StoreError>;

    /// Looks a course up by exact name. Used to reject duplicate course names.
    async fn find_course_by_name(&self, name: &str) -> Result<Option<Course>, StoreError>;

    /// All students, ordered by id.
    async fn list_students(&self) -> Result<Vec<Student>, StoreError>;

    /// All courses, ordered by id.
    async fn list_courses(&self) -> Result<Vec<Course>, StoreError>;

    /// All enrollments, ordered by id.
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, StoreError>;

    /// Ledger entries for one enrollment, ordered by payment id.
    async fn payments_for_enrollment(
        &self,
        id: EnrollmentId,
    ) -> Result<Vec<Payment>, StoreError>;

    // Writes (buffered until commit)

    fn insert_student(&mut self, draft: NewStudent) -> Student;
    fn insert_course(&mut self, draft: NewCourse) -> Course;
    fn insert_enrollment(&mut self, draft: NewEnrollment) -> Enrollment;
    fn insert_payment(&mut self, draft: NewPayment) -> Payment;

    fn update_student(&mut self, student: Student);
    fn update_course(&mut self, course: Course);
    fn update_enrollment(&mut self, enrollment: Enrollment);

    fn delete_student(&mut self, student: Student);
    fn delete_course(&mut self, course: Course);
    fn delete_enrollment(&mut self, enrollment: Enrollment);

    /// Applies every buffered write atomically.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Conflict`] when any update or delete no longer matches
    ///   the version it was read at; nothing is applied.
    /// - [`StoreError::Unavailable`] when the store cannot be reached.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn EntityStore) {}
    }

    #[test]
    fn conflict_converts_to_registry_conflict() {
        let err: RegistryError = StoreError::Conflict {
            entity: EntityKind::Enrollment,
            id: 3,
        }
        .into();
        assert!(matches!(err, RegistryError::Conflict { .. }));
    }

    #[test]
    fn unavailable_converts_to_store_unavailable() {
        let err: RegistryError = StoreError::Unavailable("down".into()).into();
        assert_eq!(err, RegistryError::StoreUnavailable("down".into()));
    }
}
