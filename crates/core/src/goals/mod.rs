//! Goals module - goals, their steps, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;


#[cfg(test)]
mod goals_service_tests;

pub use goals_model::{completion_percentage, Goal, GoalProgress, Step};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
