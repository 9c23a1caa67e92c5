//! ListCoursesHandler - Query handler for all courses.

use std::sync::Arc;

use crate::domain::foundation::RegistryError;
use crate::domain::Course;
use crate::ports::EntityStore;

/// Handler listing every course, ordered by id.
pub struct ListCoursesHandler {
    store: Arc<dyn EntityStore>,
}

impl ListCoursesHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Course>, RegistryError> {
        let session = self.store.session().await?;
        Ok(session.list_courses().await?)
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
    async fn lists_courses_in_id_order() {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();
        let mut session = store.session().await.unwrap();
        session.insert_course(NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap());
        session.insert_course(NewCourse::new("Physics", dec!(90.00), now, now).unwrap());
        session.commit().await.unwrap();

        let courses = ListCoursesHandler::new(store).handle().await.unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].name, "Mathematics");
        assert_eq!(courses[1].name, "Physics");
    }
}
