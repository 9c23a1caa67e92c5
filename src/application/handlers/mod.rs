//! Application handlers, one module per resource.

pub mod course;
pub mod enrollment;
pub mod payment;
pub mod student;
