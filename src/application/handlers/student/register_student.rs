//! RegisterStudentHandler - Command handler for admitting a student.

use std::sync::Arc;

use crate::domain::foundation::RegistryError;
use crate::domain::{NewStudent, Student};
use crate::ports::EntityStore;

/// Command to register a student.
#[derive(Debug, Clone)]
pub struct RegisterStudentCommand {
    pub name: String,
    pub last_name: String,
    pub age: u8,
}

/// Handler for student registration.
pub struct RegisterStudentHandler {
    store: Arc<dyn EntityStore>,
}

impl RegisterStudentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RegisterStudentCommand) -> Result<Student, RegistryError> {
        let draft = NewStudent::new(cmd.name, cmd.last_name, cmd.age)?;

        let mut session = self.store.session().await?;
        let student = session.insert_student(draft);
        session.commit().await?;

        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::ValidationError;

    #[tokio::test]
    async fn registers_an_adult_student() {
        let store = Arc::new(InMemoryEntityStore::new());
        let handler = RegisterStudentHandler::new(store.clone());

        let student = handler
            .handle(RegisterStudentCommand {
                name: "Ana".into(),
                last_name: "Souza".into(),
                age: 20,
            })
            .await
            .unwrap();

        assert_eq!(student.id.get(), 1);

        let session = store.session().await.unwrap();
        assert!(session.find_student(student.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_a_minor_without_touching_the_store() {
        let store = Arc::new(InMemoryEntityStore::new());
        let handler = RegisterStudentHandler::new(store.clone());

        let err = handler
            .handle(RegisterStudentCommand {
                name: "Ana".into(),
                last_name: "Souza".into(),
                age: 17,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::Validation(ValidationError::Underage { actual: 17 })
        );

        let session = store.session().await.unwrap();
        assert!(session.list_students().await.unwrap().is_empty());
    }
}
