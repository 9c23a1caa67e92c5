//! Domain layer: entities and the invariants they defend.

pub mod course;
pub mod enrollment;
pub mod foundation;
pub mod payment;
pub mod student;

pub use course::{Course, NewCourse};
pub use enrollment::{Enrollment, NewEnrollment};
pub use payment::{NewPayment, Payment};
pub use student::{NewStudent, Student};
