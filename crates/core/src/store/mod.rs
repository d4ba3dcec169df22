//! Store module - the in-process entity store and its consistency checks.

mod entity_store;
mod integrity;
mod store_state;


pub use entity_store::{EntityStore, Lifecycle};
pub use integrity::IntegrityViolation;
