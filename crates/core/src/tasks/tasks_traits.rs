use chrono::NaiveDate;

use super::tasks_model::{Category, Priority, Task};
use crate::errors::Result;

/// Trait for task repository operations
pub trait TaskRepositoryTrait: Send + Sync {
    /// Tasks owned by the account, in task-collection insertion order.
    /// Empty when the account is unknown.
    fn list_tasks(&self, account_id: &str) -> Result<Vec<Task>>;

    fn find_task(&self, task_id: &str) -> Result<Option<Task>>;

    /// Inserts the task and links it to the account in one step.
    fn create_task(&self, task: Task, account_id: &str) -> Result<Task>;

    /// Replaces the task with the same id. Returns `None` if unknown.
    fn update_task(&self, task: Task) -> Result<Option<Task>>;

    /// Removes the task and unlinks it. Fails only when the account is unknown.
    fn delete_task(&self, task_id: &str, account_id: &str) -> Result<()>;
}

/// Trait for task query operations layered over the repository
pub trait TaskServiceTrait: Send + Sync {
    fn get_tasks(&self, account_id: &str) -> Result<Vec<Task>>;
    fn tasks_on_date(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Task>>;
    fn tasks_by_category(&self, account_id: &str, category: Category) -> Result<Vec<Task>>;
    fn tasks_by_priority(&self, account_id: &str, priority: Priority) -> Result<Vec<Task>>;
    fn tasks_by_completion(&self, account_id: &str, is_completed: bool) -> Result<Vec<Task>>;
    fn overdue_tasks(&self, account_id: &str, today: NaiveDate) -> Result<Vec<Task>>;
    fn tasks_occurring_on(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Task>>;
    fn tasks_in_week(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Task>>;
    fn daily_progress(&self, account_id: &str, date: NaiveDate) -> Result<f64>;
    fn set_task_completed(&self, task_id: &str, is_completed: bool) -> Result<Task>;
}
