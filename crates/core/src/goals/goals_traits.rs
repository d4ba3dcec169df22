use chrono::NaiveDate;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgress, Step};

/// Trait for goal and step repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    /// Goals owned by the account, in goal-collection insertion order.
    fn list_goals(&self, account_id: &str) -> Result<Vec<Goal>>;
    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>>;
    fn create_goal(&self, goal: Goal, account_id: &str) -> Result<Goal>;
    /// Replaces the goal's editable fields. Returns `None` if unknown.
    fn update_goal(&self, goal: Goal) -> Result<Option<Goal>>;
    /// Removes the goal, its steps, and its id from account lists.
    fn delete_goal(&self, goal_id: &str, account_id: &str) -> Result<()>;

    /// Steps listed by the goal, in step-collection insertion order.
    fn list_steps(&self, goal_id: &str) -> Result<Vec<Step>>;
    fn find_step(&self, step_id: &str) -> Result<Option<Step>>;
    /// Appends the step and recomputes the goal's completion.
    fn add_step(&self, step: Step, goal_id: &str) -> Result<Goal>;
    /// Replaces the step and recomputes the named goal's completion.
    fn update_step(&self, step: Step, goal_id: &str) -> Result<Goal>;
    /// Removes the step and recomputes the goal's completion.
    fn remove_step(&self, step_id: &str, goal_id: &str) -> Result<Goal>;
}

/// Trait for goal service operations
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, account_id: &str) -> Result<Vec<Goal>>;
    fn goal_progress(&self, goal_id: &str) -> Result<GoalProgress>;
    fn set_step_completed(&self, goal_id: &str, step_id: &str, is_completed: bool)
        -> Result<Goal>;
    /// Incomplete goals due on or before `date`, earliest deadline first.
    fn goals_due_by(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Goal>>;
}
