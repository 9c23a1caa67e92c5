//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations over the entity store port. Each handler
//! owns exactly one operation and runs it inside a single store session.

pub mod handlers;
