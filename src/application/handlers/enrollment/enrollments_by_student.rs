//! EnrollmentsByStudentHandler - Query handler for one student's
//! enrollments.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError, StudentId};
use crate::ports::EntityStore;

/// Query for every enrollment of one student, paid or not.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentsByStudentQuery {
    pub student_id: StudentId,
}

/// One course a student is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub course_id: CourseId,
    pub course_name: String,
}

/// A student together with every course they are enrolled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEnrollments {
    pub student_id: StudentId,
    pub full_name: String,
    pub courses: Vec<EnrolledCourse>,
}

/// Handler listing a student's enrollments.
///
/// Unlike the course-side roster, this one does not filter on the paid
/// flag; back office staff need to see outstanding fees too. Courses whose
/// record has since been deleted are omitted from the list.
pub struct EnrollmentsByStudentHandler {
    store: Arc<dyn EntityStore>,
}

impl EnrollmentsByStudentHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: EnrollmentsByStudentQuery,
    ) -> Result<StudentEnrollments, RegistryError> {
        let session = self.store.session().await?;

        let student = session.find_student(query.student_id).await?.ok_or_else(|| {
            RegistryError::not_found(EntityKind::Student, query.student_id.get())
        })?;

        let enrollments = session.list_enrollments().await?;
        let mut courses = Vec::new();
        for enrollment in enrollments
            .iter()
            .filter(|e| e.student_id == query.student_id)
        {
            if let Some(course) = session.find_course(enrollment.course_id).await? {
                courses.push(EnrolledCourse {
                    course_id: course.id,
                    course_name: course.name,
                });
            }
        }

        Ok(StudentEnrollments {
            student_id: student.id,
            full_name: student.full_name(),
            courses,
        })
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
    async fn lists_paid_and_unpaid_courses() {
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
        session.insert_enrollment(NewEnrollment::new(ana.id, math.id, now));
        session.insert_enrollment(NewEnrollment::new(ana.id, physics.id, now));
        session.insert_enrollment(NewEnrollment::new(bia.id, math.id, now));
        session.commit().await.unwrap();

        let result = EnrollmentsByStudentHandler::new(store)
            .handle(EnrollmentsByStudentQuery { student_id: ana.id })
            .await
            .unwrap();

        assert_eq!(result.full_name, "Ana Souza");
        assert_eq!(result.courses.len(), 2);
        let names: Vec<_> = result.courses.iter().map(|c| c.course_name.as_str()).collect();
        assert!(names.contains(&"Mathematics"));
        assert!(names.contains(&"Physics"));
    }

    #[tokio::test]
    async fn deleted_courses_are_omitted() {
        let store = Arc::new(InMemoryEntityStore::new());
        let now = Timestamp::now();

        let mut session = store.session().await.unwrap();
        let ana = session.insert_student(NewStudent::new("Ana", "Souza", 20).unwrap());
        let math = session.insert_course(
            NewCourse::new("Mathematics", dec!(150.00), now, now).unwrap(),
        );
        session.insert_enrollment(NewEnrollment::new(ana.id, math.id, now));
        session.commit().await.unwrap();

        let mut session = store.session().await.unwrap();
        session.delete_course(math);
        session.commit().await.unwrap();

        let result = EnrollmentsByStudentHandler::new(store)
            .handle(EnrollmentsByStudentQuery { student_id: ana.id })
            .await
            .unwrap();

        assert!(result.courses.is_empty());
    }

    #[tokio::test]
    async fn missing_student_is_not_found() {
        let store = Arc::new(InMemoryEntityStore::new());

        let err = EnrollmentsByStudentHandler::new(store)
            .handle(EnrollmentsByStudentQuery {
                student_id: StudentId::new(5),
            })
            .await
            .unwrap_err();

        assert_eq!(err, RegistryError::not_found(EntityKind::Student, 5));
    }
}
