//! School Registry - administrative back office
//!
//! Manages students, courses and their enrollments, including fee payment
//! tracking. The enrollment workflow keeps the fee-paid flag, the payment
//! ledger and the enrollment record mutually consistent under concurrent
//! requests.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
