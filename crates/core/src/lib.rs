//! Synkr Core - entities, the in-process entity store, and services.
//!
//! The store owns every account, task, goal, step and achievement definition
//! and keeps the ownership lists and goal completion percentages consistent
//! on every mutation. Presentation layers talk to it through the repository
//! and service traits re-exported here.

pub mod accounts;
pub mod achievements;
pub mod bootstrap;
pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod store;
pub mod tasks;
pub mod utils;

pub use store::{EntityStore, IntegrityViolation, Lifecycle};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
