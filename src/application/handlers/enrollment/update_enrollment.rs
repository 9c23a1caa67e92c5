//! UpdateEnrollmentHandler - Command handler for repointing an enrollment.

use std::sync::Arc;

use crate::domain::foundation::{
    CourseId, EnrollmentId, EntityKind, RegistryError, StudentId, Timestamp,
};
use crate::domain::Enrollment;
use crate::ports::EntityStore;

/// Command to point an existing enrollment at a different student and/or
/// course.
///
/// Deliberately carries no paid flag; the fee state is owned by the payment
/// recorder and survives the update untouched.
#[derive(Debug, Clone, Copy)]
pub struct UpdateEnrollmentCommand {
    pub enrollment_id: EnrollmentId,
    pub student_id: StudentId,
    pub course_id: CourseId,
}

/// Handler for enrollment updates.
///
/// Both new references must resolve; a dangling one fails the command rather
/// than being silently dropped.
pub struct UpdateEnrollmentHandler {
    store: Arc<dyn EntityStore>,
}

impl UpdateEnrollmentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateEnrollmentCommand) -> Result<Enrollment, RegistryError> {
        let mut session = self.store.session().await?;

        let mut enrollment = session
            .find_enrollment(cmd.enrollment_id)
            .await?
            .ok_or_else(|| {
                RegistryError::not_found(EntityKind::Enrollment, cmd.enrollment_id.get())
            })?;

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

        enrollment.reassign(cmd.student_id, cmd.course_id, Timestamp::now());
        session.update_enrollment(enrollment.clone());
        session.commit().await?;

        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::application::handlers::payment::{RecordPaymentCommand, RecordPaymentHandler};
    use crate::domain::{NewCourse, NewEnrollment, NewStudent};
    use rust_decimal_macros::dec;

    struct Fixture {
        store: Arc<InMemoryEntityStore>,
        ana: StudentId,
        bia: StudentId,
        math: CourseId,
        physics: CourseId,
        enrollment: EnrollmentId,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();

        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        let bia = session.insert_student(NewStudent::new("Bia", "Lima", 22).unwrap());
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        let physics = session.insert_course(
            NewCourse::new("Physics", dec!(90.00), now, now).unwrap(),
        );
        let enrollment = session.insert_enrollment(NewEnrollment::new(ana.id, math.id, now));
        session.commit().await.unwrap();

        Fixture {
            store,
            ana: ana.id,
            bia: bia.id,
            math: math.id,
            physics: physics.id,
            enrollment: enrollment.id,
        }
    }

    #[tokio::test]
    async fn repoints_both_references() {
        let f = fixture().await;
        let handler = UpdateEnrollmentHandler::new(f.store.clone());

        let updated = handler
            .handle(UpdateEnrollmentCommand {
                enrollment_id: f.enrollment,
                student_id: f.bia,
                course_id: f.physics,
            })
            .await
            .unwrap();

        assert_eq!(updated.student_id, f.bia);
        assert_eq!(updated.course_id, f.physics);

        let session = f.store.session().await.unwrap();
        let stored = session.find_enrollment(f.enrollment).await.unwrap().unwrap();
        assert_eq!(stored.student_id, f.bia);
        assert!(stored.last_update.is_after(&stored.enrollment_date));
    }

    #[tokio::test]
    async fn dangling_student_fails_instead_of_nulling_the_reference() {
        let f = fixture().await;
        let handler = UpdateEnrollmentHandler::new(f.store.clone());

        let err = handler
            .handle(UpdateEnrollmentCommand {
                enrollment_id: f.enrollment,
                student_id: StudentId::new(99),
                course_id: f.math,
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Student, 99));

        let session = f.store.session().await.unwrap();
        let stored = session.find_enrollment(f.enrollment).await.unwrap().unwrap();
        assert_eq!(stored.student_id, f.ana);
    }

    #[tokio::test]
    async fn update_preserves_the_paid_flag() {
        let f = fixture().await;

        RecordPaymentHandler::new(f.store.clone())
            .handle(RecordPaymentCommand {
                enrollment_id: f.enrollment,
            })
            .await
            .unwrap();

        UpdateEnrollmentHandler::new(f.store.clone())
            .handle(UpdateEnrollmentCommand {
                enrollment_id: f.enrollment,
                student_id: f.bia,
                course_id: f.physics,
            })
            .await
            .unwrap();

        let session = f.store.session().await.unwrap();
        let stored = session.find_enrollment(f.enrollment).await.unwrap().unwrap();
        assert!(stored.is_fee_paid);
    }

    #[tokio::test]
    async fn missing_enrollment_is_not_found() {
        let f = fixture().await;
        let handler = UpdateEnrollmentHandler::new(f.store);

        let err = handler
            .handle(UpdateEnrollmentCommand {
                enrollment_id: EnrollmentId::new(50),
                student_id: f.ana,
                course_id: f.math,
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Enrollment, 50));
    }
}
