//! Enrollment entity.
//!
//! An enrollment links one student to one course and tracks whether the
//! registration fee has been settled. `is_fee_paid` starts false and flips to
//! true exactly once, through [`Enrollment::mark_fee_paid`]; nothing else in
//! the crate writes that flag.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseId, EnrollmentId, RegistryError, StudentId, Timestamp};

/// Draft of an enrollment, not yet stored.
///
/// Referential validity (the student and course actually existing) is checked
/// by the workflow against the store, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEnrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub enrollment_date: Timestamp,
}

impl NewEnrollment {
    pub fn new(student_id: StudentId, course_id: CourseId, enrollment_date: Timestamp) -> Self {
        Self {
            student_id,
            course_id,
            enrollment_date,
        }
    }
}

/// A student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Store-assigned identity; the handle later used to pay or cancel.
    pub id: EnrollmentId,

    pub student_id: StudentId,
    pub course_id: CourseId,
    pub enrollment_date: Timestamp,

    /// When the enrollment was last repointed; equals `enrollment_date`
    /// until the first update.
    pub last_update: Timestamp,

    /// Whether the registration fee has been settled.
    pub is_fee_paid: bool,

    /// Record version, bumped by the store on every committed update.
    pub version: u64,
}

impl Enrollment {
    /// Materializes a draft under a freshly assigned identity.
    ///
    /// New enrollments always start unpaid.
    pub fn from_draft(id: EnrollmentId, draft: NewEnrollment) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            course_id: draft.course_id,
            enrollment_date: draft.enrollment_date,
            last_update: draft.enrollment_date,
            is_fee_paid: false,
            version: 1,
        }
    }

    /// Points the enrollment at a different student and/or course.
    ///
    /// The paid flag is deliberately untouched; it belongs to the payment
    /// recorder.
    pub fn reassign(&mut self, student_id: StudentId, course_id: CourseId, at: Timestamp) {
        self.student_id = student_id;
        self.course_id = course_id;
        self.last_update = at;
    }

    /// Settles the registration fee.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Conflict`] when the fee is already paid; an
    /// enrollment is paid at most once.
    pub fn mark_fee_paid(&mut self) -> Result<(), RegistryError> {
        if self.is_fee_paid {
            return Err(RegistryError::conflict(format!(
                "Enrollment {} fee is already paid",
                self.id
            )));
        }
        self.is_fee_paid = true;
        Ok(())
    }
}
