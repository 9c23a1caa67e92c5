//! RegisterCourseHandler - Command handler for opening a course.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::foundation::{RegistryError, Timestamp};
use crate::domain::{Course, NewCourse};
use crate::ports::EntityStore;

/// Command to open a new course.
#[derive(Debug, Clone)]
pub struct RegisterCourseCommand {
    pub name: String,
    pub registration_fee: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Handler for course registration.
///
/// Course names are unique; a second course under an existing name is a
/// conflict.
pub struct RegisterCourseHandler {
    store: Arc<dyn EntityStore>,
}

impl RegisterCourseHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RegisterCourseCommand) -> Result<Course, RegistryError> {
        let draft = NewCourse::new(cmd.name, cmd.registration_fee, cmd.start_date, cmd.end_date)?;

        let mut session = self.store.session().await?;

        if session.find_course_by_name(&draft.name).await?.is_some() {
            return Err(RegistryError::conflict(format!(
                "A course named '{}' already exists",
                draft.name
            )));
        }

        let course = session.insert_course(draft);
        session.commit().await?;

        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::ValidationError;
    use rust_decimal_macros::dec;

    fn command(name: &str) -> RegisterCourseCommand {
        let now = Timestamp::now();
        RegisterCourseCommand {
            name: name.into(),
            registration_fee: dec!(150.00),
            start_date: now,
            end_date: now,
        }
    }

    #[tokio::test]
    async fn registers_a_course() {
        let store = Arc::new(InMemoryEntityStore::new());
        let handler = RegisterCourseHandler::new(store.clone());

        let course = handler.handle(command("Mathematics")).await.unwrap();

        let session = store.session().await.unwrap();
        assert!(session.find_course(course.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn duplicate_name_is_a_conflict() {
        let store = Arc::new(InMemoryEntityStore::new());
        let handler = RegisterCourseHandler::new(store.clone());

        handler.handle(command("Mathematics")).await.unwrap();
        let err = handler.handle(command("Mathematics")).await.unwrap_err();

        assert!(matches!(err, RegistryError::Conflict { .. }));

        let session = store.session().await.unwrap();
        assert_eq!(session.list_courses().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn negative_fee_is_rejected() {
        let store = Arc::new(InMemoryEntityStore::new());
        let handler = RegisterCourseHandler::new(store);

        let mut cmd = command("Mathematics");
        cmd.registration_fee = dec!(-5);

        let err = handler.handle(cmd).await.unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Validation(ValidationError::NegativeFee { .. })
        ));
    }
}
