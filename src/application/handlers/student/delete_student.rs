//! DeleteStudentHandler - Command handler for removing a student.

use std::sync::Arc;

use crate::domain::foundation::{EntityKind, RegistryError, StudentId};
use crate::ports::EntityStore;

/// Command to remove a student.
#[derive(Debug, Clone, Copy)]
pub struct DeleteStudentCommand {
    pub student_id: StudentId,
}

/// Handler for student removal.
///
/// The delete is unconditional: existing enrollments are left in place and
/// show up with an unresolved student name in the overview listing.
pub struct DeleteStudentHandler {
    store: Arc<dyn EntityStore>,
}

impl DeleteStudentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteStudentCommand) -> Result<(), RegistryError> {
        let mut session = self.store.session().await?;

        let student = session
            .find_student(cmd.student_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Student, cmd.student_id.get()))?;

        session.delete_student(student);
        session.commit().await?;

        Ok(())
    }
}
