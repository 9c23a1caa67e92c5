//! UpdateStudentHandler - Command handler for editing a student's details.

use std::sync::Arc;

use crate::domain::foundation::{EntityKind, RegistryError, StudentId};
use crate::domain::{NewStudent, Student};
use crate::ports::EntityStore;

/// Command to replace a student's details.
#[derive(Debug, Clone)]
pub struct UpdateStudentCommand {
    pub student_id: StudentId,
    pub name: String,
    pub last_name: String,
    pub age: u8,
}

/// Handler for student updates.
///
/// Runs the same draft validation as registration; an update cannot smuggle
/// in a minor.
pub struct UpdateStudentHandler {
    store: Arc<dyn EntityStore>,
}

impl UpdateStudentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateStudentCommand) -> Result<Student, RegistryError> {
        let draft = NewStudent::new(cmd.name, cmd.last_name, cmd.age)?;

        let mut session = self.store.session().await?;
        let mut student = session
            .find_student(cmd.student_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Student, cmd.student_id.get()))?;

        student.apply(draft);
        session.update_student(student.clone());
        session.commit().await?;

        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::ValidationError;

    async fn store_with_ana() -> (Arc<InMemoryEntityStore>, StudentId) {
        let store = Arc::new(InMemoryEntityStore::new());
        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        session.commit().await.unwrap();
        (store, ana.id)
    }

    #[tokio::test]
    async fn updates_the_stored_details() {
        let (store, id) = store_with_ana().await;

        UpdateStudentHandler::new(store.clone())
            .handle(UpdateStudentCommand {
                student_id: id,
                name: "Ana".into(),
                last_name: "Lima".into(),
                age: 21,
            })
            .await
            .unwrap();

        let session = store.session().await.unwrap();
        let stored = session.find_student(id).await.unwrap().unwrap();
        assert_eq!(stored.last_name, "Lima");
        assert_eq!(stored.age, 21);
    }

    #[tokio::test]
    async fn update_cannot_make_a_student_a_minor() {
        let (store, id) = store_with_ana().await;

        let err = UpdateStudentHandler::new(store.clone())
            .handle(UpdateStudentCommand {
                student_id: id,
                name: "Ana".into(),
                last_name: "Souza".into(),
                age: 15,
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::Validation(ValidationError::Underage { actual: 15 })
        );

        let session = store.session().await.unwrap();
        assert_eq!(session.find_student(id).await.unwrap().unwrap().age, 20);
    }

    #[tokio::test]
    async fn missing_student_is_not_found() {
        let store = Arc::new(InMemoryEntityStore::new());

        let err = UpdateStudentHandler::new(store)
            .handle(UpdateStudentCommand {
                student_id: StudentId::new(8),
                name: "Ana".into(),
                last_name: "Souza".into(),
                age: 20,
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Student, 8));
    }
}
