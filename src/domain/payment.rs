//! Payment record.
//!
//! A payment is an append-only ledger entry. It snapshots the student name,
//! course name and amount at the moment of payment, so later edits or
//! deletions of those records never rewrite payment history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EnrollmentId, PaymentId, Timestamp};
use crate::domain::{Course, Enrollment, Student};

/// Draft of a payment, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    pub enrollment_id: EnrollmentId,
    pub student_name: String,
    pub course_name: String,
    pub amount: Decimal,
    pub paid_at: Timestamp,
}

impl NewPayment {
    /// Snapshots the parties of an enrollment at payment time.
    ///
    /// The amount is the course's registration fee as it stands now.
    pub fn for_enrollment(
        enrollment: &Enrollment,
        student: &Student,
        course: &Course,
        paid_at: Timestamp,
    ) -> Self {
        Self {
            enrollment_id: enrollment.id,
            student_name: student.full_name(),
            course_name: course.name.clone(),
            amount: course.registration_fee,
            paid_at,
        }
    }
}

/// A committed ledger entry. Never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Store-assigned identity.
    pub id: PaymentId,

    pub enrollment_id: EnrollmentId,
    pub student_name: String,
    pub course_name: String,
    pub amount: Decimal,
    pub paid_at: Timestamp,
}

impl Payment {
    /// Materializes a draft under a freshly assigned identity.
    pub fn from_draft(id: PaymentId, draft: NewPayment) -> Self {
        Self {
            id,
            enrollment_id: draft.enrollment_id,
            student_name: draft.student_name,
            course_name: draft.course_name,
            amount: draft.amount,
            paid_at: draft.paid_at,
        }
    }
}
