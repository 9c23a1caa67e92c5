//! IsEnrolledHandler - Query handler for the enrollment-exists check.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, RegistryError, StudentId};
use crate::ports::EntityStore;

/// Query asking whether a student holds a confirmed seat in a course.
#[derive(Debug, Clone, Copy)]
pub struct IsEnrolledQuery {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Handler for the membership check.
///
/// Counts only fee-paid enrollments, consistent with the course roster: an
/// unpaid enrollment answers `false`. Ids that match nothing also answer
/// `false`; this is a pure existence query, not a lookup.
pub struct IsEnrolledHandler {
    store: Arc<dyn EntityStore>,
}

impl IsEnrolledHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: IsEnrolledQuery) -> Result<bool, RegistryError> {
        let session = self.store.session().await?;

        let enrollments = session.list_enrollments().await?;
        Ok(enrollments.iter().any(|e| {
            e.student_id == query.student_id && e.course_id == query.course_id && e.is_fee_paid
        }))
    }
}
