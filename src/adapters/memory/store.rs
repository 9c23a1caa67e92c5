//! In-Memory Entity Store Adapter
//!
//! Keeps all records behind one `RwLock`. Sessions read the committed state
//! and buffer their writes; commit replays the buffer against a scratch copy
//! of the state and only swaps it in when every version check passes, so a
//! failed commit leaves nothing behind.
//!
//! Identities come from atomic counters shared by every session, which is
//! what lets `insert_*` hand back a materialized entity before commit.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    CourseId, EnrollmentId, EntityKind, PaymentId, StudentId,
};
use crate::domain::{
    Course, Enrollment, NewCourse, NewEnrollment, NewPayment, NewStudent, Payment, Student,
};
use crate::ports::{EntityStore, StoreError, StoreSession};

#[derive(Debug, Clone, Default)]
struct StoreState {
    students: BTreeMap<i64, Student>,
    courses: BTreeMap<i64, Course>,
    enrollments: BTreeMap<i64, Enrollment>,
    payments: BTreeMap<i64, Payment>,
}

#[derive(Debug, Default)]
struct IdCounters {
    student: AtomicI64,
    course: AtomicI64,
    enrollment: AtomicI64,
    payment: AtomicI64,
}

impl IdCounters {
    fn next(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// In-memory store for students, courses, enrollments and payments.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityStore {
    state: Arc<RwLock<StoreState>>,
    ids: Arc<IdCounters>,
}

impl InMemoryEntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of committed payment records (useful for tests).
    pub async fn payment_count(&self) -> usize {
        self.state.read().await.payments.len()
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn session(&self) -> Result<Box<dyn StoreSession>, StoreError> {
        Ok(Box::new(MemorySession {
            state: Arc::clone(&self.state),
            ids: Arc::clone(&self.ids),
            writes: Vec::new(),
        }))
    }
}

#[derive(Debug)]
enum WriteOp {
    InsertStudent(Student),
    InsertCourse(Course),
    InsertEnrollment(Enrollment),
    InsertPayment(Payment),
    UpdateStudent(Student),
    UpdateCourse(Course),
    UpdateEnrollment(Enrollment),
    DeleteStudent(Student),
    DeleteCourse(Course),
    DeleteEnrollment(Enrollment),
}

struct MemorySession {
    state: Arc<RwLock<StoreState>>,
    ids: Arc<IdCounters>,
    writes: Vec<WriteOp>,
}

/// Version-checked upsert of one record kind.
///
/// `expected` is the version the session read; the record must still carry it
/// for the write to apply.
fn apply_versioned<T: Clone>(
    map: &mut BTreeMap<i64, T>,
    id: i64,
    expected: u64,
    entity: EntityKind,
    current_version: impl Fn(&T) -> u64,
    write: Option<T>,
) -> Result<(), StoreError> {
    match map.get(&id) {
        Some(existing) if current_version(existing) == expected => {
            match write {
                Some(updated) => {
                    map.insert(id, updated);
                }
                None => {
                    map.remove(&id);
                }
            }
            Ok(())
        }
        _ => Err(StoreError::Conflict { entity, id }),
    }
}

fn apply(state: &mut StoreState, op: WriteOp) -> Result<(), StoreError> {
    match op {
        WriteOp::InsertStudent(s) => {
            let id = s.id.get();
            if state.students.insert(id, s).is_some() {
                return Err(StoreError::Conflict {
                    entity: EntityKind::Student,
                    id,
                });
            }
            Ok(())
        }
        WriteOp::InsertCourse(c) => {
            let id = c.id.get();
            if state.courses.insert(id, c).is_some() {
                return Err(StoreError::Conflict {
                    entity: EntityKind::Course,
                    id,
                });
            }
            Ok(())
        }
        WriteOp::InsertEnrollment(e) => {
            let id = e.id.get();
            if state.enrollments.insert(id, e).is_some() {
                return Err(StoreError::Conflict {
                    entity: EntityKind::Enrollment,
                    id,
                });
            }
            Ok(())
        }
        WriteOp::InsertPayment(p) => {
            // Payments are append-only; counter-assigned ids cannot collide.
            state.payments.insert(p.id.get(), p);
            Ok(())
        }
        WriteOp::UpdateStudent(mut s) => {
            let (id, expected) = (s.id.get(), s.version);
            s.version += 1;
            apply_versioned(
                &mut state.students,
                id,
                expected,
                EntityKind::Student,
                |r| r.version,
                Some(s),
            )
        }
        WriteOp::UpdateCourse(mut c) => {
            let (id, expected) = (c.id.get(), c.version);
            c.version += 1;
            apply_versioned(
                &mut state.courses,
                id,
                expected,
                EntityKind::Course,
                |r| r.version,
                Some(c),
            )
        }
        WriteOp::UpdateEnrollment(mut e) => {
            let (id, expected) = (e.id.get(), e.version);
            e.version += 1;
            apply_versioned(
                &mut state.enrollments,
                id,
                expected,
                EntityKind::Enrollment,
                |r| r.version,
                Some(e),
            )
        }
        WriteOp::DeleteStudent(s) => apply_versioned(
            &mut state.students,
            s.id.get(),
            s.version,
            EntityKind::Student,
            |r| r.version,
            None,
        ),
        WriteOp::DeleteCourse(c) => apply_versioned(
            &mut state.courses,
            c.id.get(),
            c.version,
            EntityKind::Course,
            |r| r.version,
            None,
        ),
        WriteOp::DeleteEnrollment(e) => apply_versioned(
            &mut state.enrollments,
            e.id.get(),
            e.version,
            EntityKind::Enrollment,
            |r| r.version,
            None,
        ),
    }
}

#[async_trait]
impl StoreSession for MemorySession {
    async fn find_student(&self, id: StudentId) -> Result<Option<Student>, StoreError> {
        Ok(self.state.read().await.students.get(&id.get()).cloned())
    }

    async fn find_course(&self, id: CourseId) -> Result<Option<Course>, StoreError> {
        Ok(self.state.read().await.courses.get(&id.get()).cloned())
    }

    async fn find_enrollment(&self, id: EnrollmentId) -> Result<Option<Enrollment>, StoreError> {
        Ok(self.state.read().await.enrollments.get(&id.get()).cloned())
    }

    async fn find_course_by_name(&self, name: &str) -> Result<Option<Course>, StoreError> {
        let state = self.state.read().await;
        Ok(state.courses.values().find(|c| c.name == name).cloned())
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.state.read().await.students.values().cloned().collect())
    }

    async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.state.read().await.courses.values().cloned().collect())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .enrollments
            .values()
            .cloned()
            .collect())
    }

    async fn payments_for_enrollment(
        &self,
        id: EnrollmentId,
    ) -> Result<Vec<Payment>, StoreError> {
        Ok(self
            .state
            .read()
            .await
            .payments
            .values()
            .filter(|p| p.enrollment_id == id)
            .cloned()
            .collect())
    }

    fn insert_student(&mut self, draft: NewStudent) -> Student {
        let id = StudentId::new(IdCounters::next(&self.ids.student));
        let student = Student::from_draft(id, draft);
        self.writes.push(WriteOp::InsertStudent(student.clone()));
        student
    }

    fn insert_course(&mut self, draft: NewCourse) -> Course {
        let id = CourseId::new(IdCounters::next(&self.ids.course));
        let course = Course::from_draft(id, draft);
        self.writes.push(WriteOp::InsertCourse(course.clone()));
        course
    }

    fn insert_enrollment(&mut self, draft: NewEnrollment) -> Enrollment {
        let id = EnrollmentId::new(IdCounters::next(&self.ids.enrollment));
        let enrollment = Enrollment::from_draft(id, draft);
        self.writes.push(WriteOp::InsertEnrollment(enrollment.clone()));
        enrollment
    }

    fn insert_payment(&mut self, draft: NewPayment) -> Payment {
        let id = PaymentId::new(IdCounters::next(&self.ids.payment));
        let payment = Payment::from_draft(id, draft);
        self.writes.push(WriteOp::InsertPayment(payment.clone()));
        payment
    }

    fn update_student(&mut self, student: Student) {
        self.writes.push(WriteOp::UpdateStudent(student));
    }

    fn update_course(&mut self, course: Course) {
        self.writes.push(WriteOp::UpdateCourse(course));
    }

    fn update_enrollment(&mut self, enrollment: Enrollment) {
        self.writes.push(WriteOp::UpdateEnrollment(enrollment));
    }

    fn delete_student(&mut self, student: Student) {
        self.writes.push(WriteOp::DeleteStudent(student));
    }

    fn delete_course(&mut self, course: Course) {
        self.writes.push(WriteOp::DeleteCourse(course));
    }

    fn delete_enrollment(&mut self, enrollment: Enrollment) {
        self.writes.push(WriteOp::DeleteEnrollment(enrollment));
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        if self.writes.is_empty() {
            return Ok(());
        }

        let mut state = self.state.write().await;

        // Replay against a scratch copy so a mid-buffer conflict cannot leave
        // a half-applied commit. The scratch also makes update-after-insert
        // within one session see the pending record.
        let mut next = state.clone();
        for op in self.writes {
            apply(&mut next, op)?;
        }

        *state = next;
        Ok(())
    }
}
