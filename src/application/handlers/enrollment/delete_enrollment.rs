//! DeleteEnrollmentHandler - Command handler for cancelling an enrollment.

use std::sync::Arc;

use crate::domain::foundation::{EnrollmentId, EntityKind, RegistryError};
use crate::ports::EntityStore;

/// Command to cancel an enrollment.
#[derive(Debug, Clone, Copy)]
pub struct DeleteEnrollmentCommand {
    pub enrollment_id: EnrollmentId,
}

/// Handler for enrollment cancellation.
///
/// The delete is unconditional with respect to payment state: a paid
/// enrollment can be cancelled, and its ledger entries stay on record.
pub struct DeleteEnrollmentHandler {
    store: Arc<dyn EntityStore>,
}

impl DeleteEnrollmentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteEnrollmentCommand) -> Result<(), RegistryError> {
        let mut session = self.store.session().await?;

        let enrollment = session
            .find_enrollment(cmd.enrollment_id)
            .await?
            .ok_or_else(|| {
                RegistryError::not_found(EntityKind::Enrollment, cmd.enrollment_id.get())
            })?;

        session.delete_enrollment(enrollment);
        session.commit().await?;

        Ok(())
    }
}
