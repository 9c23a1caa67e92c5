//! ListStudentsHandler - Query handler for all students.

use std::sync::Arc;

use crate::domain::foundation::RegistryError;
use crate::domain::Student;
use crate::ports::EntityStore;

/// Handler listing every registered student, ordered by id.
pub struct ListStudentsHandler {
    store: Arc<dyn EntityStore>,
}

impl ListStudentsHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Student>, RegistryError> {
        let session = self.store.session().await?;
        Ok(session.list_students().await?)
    }
}
