//! ListEnrollmentsHandler - Query handler for the enrollment overview.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::RegistryError;
use crate::domain::Enrollment;
use crate::ports::EntityStore;

/// One row of the overview: the enrollment plus resolved party names.
///
/// Unconditional deletes can leave an enrollment pointing at a removed
/// student or course; those names come back as `None` rather than failing
/// the whole listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentSummary {
    pub enrollment: Enrollment,
    pub student_name: Option<String>,
    pub course_name: Option<String>,
}

/// Handler returning every enrollment with student and course names joined
/// in.
pub struct ListEnrollmentsHandler {
    store: Arc<dyn EntityStore>,
}

impl ListEnrollmentsHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<EnrollmentSummary>, RegistryError> {
        let session = self.store.session().await?;

        let enrollments = session.list_enrollments().await?;
        let students: BTreeMap<_, _> = session
            .list_students()
            .await?
            .into_iter()
            .map(|s| (s.id, s.full_name()))
            .collect();
        let courses: BTreeMap<_, _> = session
            .list_courses()
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(enrollments
            .into_iter()
            .map(|enrollment| EnrollmentSummary {
                student_name: students.get(&enrollment.student_id).cloned(),
                course_name: courses.get(&enrollment.course_id).cloned(),
                enrollment,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::{NewCourse, NewEnrollment, NewStudent};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn joins_student_and_course_names() {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();

        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        session.insert_enrollment(NewEnrollment::new(ana.id, math.id, now));
        session.commit().await.unwrap();

        let rows = ListEnrollmentsHandler::new(store).handle().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_name.as_deref(), Some("Ana Souza"));
        assert_eq!(rows[0].course_name.as_deref(), Some("Mathematics"));
    }

    #[tokio::test]
    async fn dangling_references_resolve_to_none() {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();

        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        session.insert_enrollment(NewEnrollment::new(ana.id, math.id, now));
        session.commit().await.unwrap();

        // Delete the student out from under the enrollment.
        let mut session = store.session().await.unwrap();
        let stored = session.find_student(ana.id).await.unwrap().unwrap();
        session.delete_student(stored);
        session.commit().await.unwrap();

        let rows = ListEnrollmentsHandler::new(store).handle().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].student_name, None);
        assert_eq!(rows[0].course_name.as_deref(), Some("Mathematics"));
    }

    #[tokio::test]
    async fn empty_store_yields_an_empty_listing() {
        let store = Arc::new(InMemoryEntityStore::new());
        let rows = ListEnrollmentsHandler::new(store).handle().await.unwrap();
        assert!(rows.is_empty());
    }
}
