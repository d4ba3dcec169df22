use crate::accounts::Account;
use crate::achievements::AchievementDefinition;
use crate::errors::Result;
use crate::goals::{Goal, Step};
use crate::tasks::Task;

/// Supplies the data a store seeds itself with on first access.
pub trait StoreBootstrap: Send + Sync {
    fn load(&self) -> Result<SeedData>;
}

/// Fixture data, grouped by owner so linkage is implied by nesting.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub achievement_definitions: Vec<AchievementDefinition>,
    pub accounts: Vec<SeedAccount>,
}

#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub account: Account,
    pub tasks: Vec<Task>,
    pub goals: Vec<SeedGoal>,
}

#[derive(Debug, Clone)]
pub struct SeedGoal {
    pub goal: Goal,
    pub steps: Vec<Step>,
}
