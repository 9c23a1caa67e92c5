//! Payment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::PaymentResponse;
pub use routes::routes;
