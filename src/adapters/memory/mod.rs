//! In-memory entity store adapter.

mod store;

pub use store::InMemoryEntityStore;
