//! DeleteCourseHandler - Command handler for closing a course.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError};
use crate::ports::EntityStore;

/// Command to remove a course.
#[derive(Debug, Clone, Copy)]
pub struct DeleteCourseCommand {
    pub course_id: CourseId,
}

/// Handler for course removal.
///
/// Unconditional, like student removal: enrollments pointing at the course
/// remain and resolve to an unknown course name in the overview.
pub struct DeleteCourseHandler {
    store: Arc<dyn EntityStore>,
}

impl DeleteCourseHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteCourseCommand) -> Result<(), RegistryError> {
        let mut session = self.store.session().await?;

        let course = session
            .find_course(cmd.course_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Course, cmd.course_id.get()))?;

        session.delete_course(course);
        session.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::NewCourse;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn deletes_an_existing_course() {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();
        let mut session = store.session().await.unwrap();
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        session.commit().await.unwrap();

        DeleteCourseHandler::new(store.clone())
            .handle(DeleteCourseCommand { course_id: math.id })
            .await
            .unwrap();

        let session = store.session().await.unwrap();
        assert!(session.find_course(math.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_a_missing_course_is_not_found() {
        let store = Arc::new(InMemoryEntityStore::new());

        let err = DeleteCourseHandler::new(store)
            .handle(DeleteCourseCommand {
                course_id: CourseId::new(3),
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Course, 3));
    }
}
