//! Achievements module - catalog definitions and earned records.

mod achievements_model;
mod achievements_traits;

pub use achievements_model::{AchievementDefinition, AchievementRecord};
pub use achievements_traits::AchievementRepositoryTrait;
