//! RegisterEnrollmentHandler - Command handler for enrolling a student in a
//! course without an up-front payment.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError, StudentId, Timestamp};
use crate::domain::{Enrollment, NewEnrollment};
use crate::ports::EntityStore;

/// Command to enroll a student in a course.
#[derive(Debug, Clone, Copy)]
pub struct RegisterEnrollmentCommand {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Handler for payment-less enrollment registration.
///
/// Both references are checked against the store before the enrollment is
/// written; a dangling student or course fails the command instead of
/// producing an orphaned record.
pub struct RegisterEnrollmentHandler {
    store: Arc<dyn EntityStore>,
}

impl RegisterEnrollmentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RegisterEnrollmentCommand,
    ) -> Result<Enrollment, RegistryError> {
        let mut session = self.store.session().await?;

        if session.find_student(cmd.student_id).await?.is_none() {
            return Err(RegistryError::not_found(
                EntityKind::Student,
                cmd.student_id.get(),
            ));
        }
        if session.find_course(cmd.course_id).await?.is_none() {
            return Err(RegistryError::not_found(
                EntityKind::Course,
                cmd.course_id.get(),
            ));
        }

        let enrollment = session.insert_enrollment(NewEnrollment::new(
            cmd.student_id,
            cmd.course_id,
            Timestamp::now(),
        ));
        session.commit().await?;

        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::{NewCourse, NewStudent};
    use rust_decimal_macros::dec;

    async fn seeded_store() -> (Arc<InMemoryEntityStore>, StudentId, CourseId) {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();

        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        session.commit().await.unwrap();

        (store, ana.id, math.id)
    }

    #[tokio::test]
    async fn registers_an_unpaid_enrollment() {
        let (store, student_id, course_id) = seeded_store().await;
        let handler = RegisterEnrollmentHandler::new(store.clone());

        let enrollment = handler
            .handle(RegisterEnrollmentCommand { student_id, course_id })
            .await
            .unwrap();

        assert!(!enrollment.is_fee_paid);

        let session = store.session().await.unwrap();
        let stored = session.find_enrollment(enrollment.id).await.unwrap().unwrap();
        assert_eq!(stored.student_id, student_id);
        assert!(!stored.is_fee_paid);
    }

    #[tokio::test]
    async fn fails_when_student_is_missing() {
        let (store, _, course_id) = seeded_store().await;
        let handler = RegisterEnrollmentHandler::new(store.clone());

        let err = handler
            .handle(RegisterEnrollmentCommand {
                student_id: StudentId::new(99),
                course_id,
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Student, 99));

        let session = store.session().await.unwrap();
        assert!(session.list_enrollments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn fails_when_course_is_missing() {
        let (store, student_id, _) = seeded_store().await;
        let handler = RegisterEnrollmentHandler::new(store);

        let err = handler
            .handle(RegisterEnrollmentCommand {
                student_id,
                course_id: CourseId::new(99),
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Course, 99));
    }
}
