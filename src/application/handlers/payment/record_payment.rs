//! RecordPaymentHandler - Command handler for settling an enrollment fee.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{EnrollmentId, EntityKind, RegistryError, Timestamp};
use crate::domain::{Course, Enrollment, NewPayment, Payment, Student};
use crate::ports::{EntityStore, StoreSession};

/// Settles the fee of `enrollment` within the caller's session.
///
/// Flips the paid flag, buffers the enrollment update and appends the ledger
/// entry; the caller commits. This is the single sanctioned path to a paid
/// enrollment, shared by the direct payment command and the
/// register-with-payment workflow.
///
/// # Errors
///
/// Returns [`RegistryError::Conflict`] when the fee is already paid.
pub fn record_fee_payment(
    session: &mut dyn StoreSession,
    enrollment: &mut Enrollment,
    student: &Student,
    course: &Course,
    paid_at: Timestamp,
) -> Result<Payment, RegistryError> {
    enrollment.mark_fee_paid()?;
    session.update_enrollment(enrollment.clone());
    let payment =
        session.insert_payment(NewPayment::for_enrollment(enrollment, student, course, paid_at));
    Ok(payment)
}

/// Command to pay the registration fee of an existing enrollment.
#[derive(Debug, Clone, Copy)]
pub struct RecordPaymentCommand {
    pub enrollment_id: EnrollmentId,
}

/// Handler for fee payment against an existing enrollment.
///
/// The flag flip and the ledger append commit together; no observer can see
/// one without the other.
pub struct RecordPaymentHandler {
    store: Arc<dyn EntityStore>,
}

impl RecordPaymentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RecordPaymentCommand) -> Result<Payment, RegistryError> {
        let mut session = self.store.session().await?;

        let mut enrollment = session
            .find_enrollment(cmd.enrollment_id)
            .await?
            .ok_or_else(|| {
                RegistryError::not_found(EntityKind::Enrollment, cmd.enrollment_id.get())
            })?;

        let student = session
            .find_student(enrollment.student_id)
            .await?
            .ok_or_else(|| {
                RegistryError::not_found(EntityKind::Student, enrollment.student_id.get())
            })?;

        let course = session
            .find_course(enrollment.course_id)
            .await?
            .ok_or_else(|| {
                RegistryError::not_found(EntityKind::Course, enrollment.course_id.get())
            })?;

        let payment = record_fee_payment(
            session.as_mut(),
            &mut enrollment,
            &student,
            &course,
            Timestamp::now(),
        )?;
        session.commit().await?;

        info!(
            enrollment_id = %cmd.enrollment_id,
            amount = %payment.amount,
            "Recorded fee payment"
        );

        Ok(payment)
    }
}
