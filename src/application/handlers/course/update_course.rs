//! UpdateCourseHandler - Command handler for editing a course.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError, Timestamp};
use crate::domain::{Course, NewCourse};
use crate::ports::EntityStore;

/// Command to replace a course's details.
#[derive(Debug, Clone)]
pub struct UpdateCourseCommand {
    pub course_id: CourseId,
    pub name: String,
    pub registration_fee: Decimal,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Handler for course updates.
///
/// Renaming onto another course's name is a conflict; keeping one's own name
/// is fine.
pub struct UpdateCourseHandler {
    store: Arc<dyn EntityStore>,
}

impl UpdateCourseHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateCourseCommand) -> Result<Course, RegistryError> {
        let draft = NewCourse::new(cmd.name, cmd.registration_fee, cmd.start_date, cmd.end_date)?;

        let mut session = self.store.session().await?;
        let mut course = session
            .find_course(cmd.course_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Course, cmd.course_id.get()))?;

        if let Some(other) = session.find_course_by_name(&draft.name).await? {
            if other.id != course.id {
                return Err(RegistryError::conflict(format!(
                    "A course named '{}' already exists",
                    draft.name
                )));
            }
        }

        course.apply(draft);
        session.update_course(course.clone());
        session.commit().await?;

        Ok(course)
    }
}
