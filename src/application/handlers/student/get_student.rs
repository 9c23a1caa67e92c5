//! GetStudentHandler - Query handler for one student.

use std::sync::Arc;

use crate::domain::foundation::{EntityKind, RegistryError, StudentId};
use crate::domain::Student;
use crate::ports::EntityStore;

/// Query for one student by id.
#[derive(Debug, Clone, Copy)]
pub struct GetStudentQuery {
    pub student_id: StudentId,
}

/// Handler fetching a single student.
pub struct GetStudentHandler {
    store: Arc<dyn EntityStore>,
}

impl GetStudentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetStudentQuery) -> Result<Student, RegistryError> {
        let session = self.store.session().await?;
        session
            .find_student(query.student_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Student, query.student_id.get()))
    }
}
