//! Bootstrap module - one-time fixture loading for demos and tests.

mod bootstrap_model;
mod sample_data;

pub use bootstrap_model::{SeedAccount, SeedData, SeedGoal, StoreBootstrap};
pub use sample_data::{SampleDataBootstrap, SAMPLE_CREDENTIAL, SAMPLE_EMAIL};
