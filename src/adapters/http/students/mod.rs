//! Student endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{StudentRequest, StudentResponse};
pub use routes::routes;
