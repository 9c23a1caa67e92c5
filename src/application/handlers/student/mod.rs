//! Student CRUD handlers.

mod delete_student;
mod get_student;
mod list_students;
mod register_student;
mod update_student;

pub use delete_student::{DeleteStudentCommand, DeleteStudentHandler};
pub use get_student::{GetStudentHandler, GetStudentQuery};
pub use list_students::ListStudentsHandler;
pub use register_student::{RegisterStudentCommand, RegisterStudentHandler};
pub use update_student::{UpdateStudentCommand, UpdateStudentHandler};
