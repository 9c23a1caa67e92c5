//! Course CRUD handlers.

mod delete_course;
mod get_course;
mod list_courses;
mod register_course;
mod update_course;

pub use delete_course::{DeleteCourseCommand, DeleteCourseHandler};
pub use get_course::{GetCourseHandler, GetCourseQuery};
pub use list_courses::ListCoursesHandler;
pub use register_course::{RegisterCourseCommand, RegisterCourseHandler};
pub use update_course::{UpdateCourseCommand, UpdateCourseHandler};
