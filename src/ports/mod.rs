//! Ports: the contracts adapters implement.

mod entity_store;

pub use entity_store::{EntityStore, StoreError, StoreSession};
