//! RegisterEnrollmentWithPaymentHandler - Command handler for the combined
//! enroll-and-pay workflow.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError, StudentId, Timestamp};
use crate::domain::{Enrollment, NewEnrollment, Payment};
use crate::ports::EntityStore;

use crate::application::handlers::payment::record_fee_payment;

/// Command to enroll a student and settle the fee in one step.
#[derive(Debug, Clone, Copy)]
pub struct RegisterEnrollmentWithPaymentCommand {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Result of the combined workflow: the paid enrollment and its ledger entry.
#[derive(Debug, Clone)]
pub struct RegisterEnrollmentWithPaymentResult {
    pub enrollment: Enrollment,
    pub payment: Payment,
}

/// Handler for enrollment with immediate payment.
///
/// Everything happens in one session with a single commit: the enrollment
/// record, the paid flag and the ledger entry all appear together or not at
/// all. A failure at any step leaves no partial state behind.
pub struct RegisterEnrollmentWithPaymentHandler {
    store: Arc<dyn EntityStore>,
}

impl RegisterEnrollmentWithPaymentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RegisterEnrollmentWithPaymentCommand,
    ) -> Result<RegisterEnrollmentWithPaymentResult, RegistryError> {
        let mut session = self.store.session().await?;

        let student = session
            .find_student(cmd.student_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Student, cmd.student_id.get()))?;

        let course = session
            .find_course(cmd.course_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Course, cmd.course_id.get()))?;

        let now = Timestamp::now();
        let mut enrollment =
            session.insert_enrollment(NewEnrollment::new(cmd.student_id, cmd.course_id, now));

        let payment =
            record_fee_payment(session.as_mut(), &mut enrollment, &student, &course, now)?;
        session.commit().await?;

        info!(
            enrollment_id = %enrollment.id,
            student_id = %cmd.student_id,
            course_id = %cmd.course_id,
            "Registered enrollment with payment"
        );

        Ok(RegisterEnrollmentWithPaymentResult { enrollment, payment })
    }
}
