//! GetCourseHandler - Query handler for one course.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError};
use crate::domain::Course;
use crate::ports::EntityStore;

/// Query for one course by id.
#[derive(Debug, Clone, Copy)]
pub struct GetCourseQuery {
    pub course_id: CourseId,
}

/// Handler fetching a single course.
pub struct GetCourseHandler {
    store: Arc<dyn EntityStore>,
}

impl GetCourseHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetCourseQuery) -> Result<Course, RegistryError> {
        let session = self.store.session().await?;
        session
            .find_course(query.course_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(EntityKind::Course, query.course_id.get()))
    }
}
