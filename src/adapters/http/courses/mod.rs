//! Course endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CourseRequest, CourseResponse};
pub use routes::routes;
