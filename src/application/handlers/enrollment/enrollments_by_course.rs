//! EnrollmentsByCourseHandler - Query handler for a course's confirmed
//! roster.

use std::sync::Arc;

use crate::domain::foundation::{CourseId, EntityKind, RegistryError, StudentId};
use crate::ports::EntityStore;

/// Query for the paid enrollments of one course.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentsByCourseQuery {
    pub course_id: CourseId,
}

/// One student holding a confirmed seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledStudent {
    pub student_id: StudentId,
    pub full_name: String,
    pub age: u8,
}

/// A course together with its fee-paid students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRoster {
    pub course_id: CourseId,
    pub course_name: String,
    pub students: Vec<EnrolledStudent>,
}

/// Handler listing a course's roster.
///
/// Only fee-paid enrollments count; an unpaid enrollment does not hold a
/// seat. Students whose record has since been deleted are omitted.
pub struct EnrollmentsByCourseHandler {
    store: Arc<dyn EntityStore>,
}

impl EnrollmentsByCourseHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: EnrollmentsByCourseQuery,
    ) -> Result<CourseRoster, RegistryError> {
        let session = self.store.session().await?;

        let course = session.find_course(query.course_id).await?.ok_or_else(|| {
            RegistryError::not_found(EntityKind::Course, query.course_id.get())
        })?;

        let enrollments = session.list_enrollments().await?;
        let mut students = Vec::new();
        for enrollment in enrollments
            .iter()
            .filter(|e| e.course_id == query.course_id && e.is_fee_paid)
        {
            if let Some(student) = session.find_student(enrollment.student_id).await? {
                students.push(EnrolledStudent {
                    student_id: student.id,
                    full_name: student.full_name(),
                    age: student.age,
                });
            }
        }

        Ok(CourseRoster {
            course_id: course.id,
            course_name: course.name,
            students,
        })
    }
}
