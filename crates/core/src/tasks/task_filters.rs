//! Pure filters over an account's task list.
//!
//! Each filter keeps the input order.

use chrono::NaiveDate;

use super::tasks_model::{Category, Priority, Task};

pub fn on_date(tasks: Vec<Task>, date: NaiveDate) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.date == date).collect()
}

pub fn by_category(tasks: Vec<Task>, category: Category) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.category == category).collect()
}

pub fn by_priority(tasks: Vec<Task>, priority: Priority) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.priority == priority).collect()
}

pub fn by_completion(tasks: Vec<Task>, is_completed: bool) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|t| t.is_completed == is_completed)
        .collect()
}

pub fn overdue(tasks: Vec<Task>, today: NaiveDate) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.is_overdue(today)).collect()
}

pub fn occurring_on(tasks: Vec<Task>, date: NaiveDate) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.occurs_on(date)).collect()
}

/// Share of `tasks` that are completed, as a percentage. Zero when empty.
pub fn completion_percentage(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|t| t.is_completed).count();
    100.0 * completed as f64 / tasks.len() as f64
}
