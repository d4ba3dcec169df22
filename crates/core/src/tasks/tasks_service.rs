use chrono::NaiveDate;
use std::sync::Arc;

use super::task_filters;
use super::tasks_model::{Category, Priority, Task};
use super::tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
use crate::errors::{NotFoundError, Result};
use crate::utils::week_dates;

pub struct TaskService {
    repository: Arc<dyn TaskRepositoryTrait>,
}

impl TaskService {
    pub fn new(repository: Arc<dyn TaskRepositoryTrait>) -> Self {
        TaskService { repository }
    }
}

impl TaskServiceTrait for TaskService {
    fn get_tasks(&self, account_id: &str) -> Result<Vec<Task>> {
        self.repository.list_tasks(account_id)
    }

    fn tasks_on_date(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Task>> {
        Ok(task_filters::on_date(self.get_tasks(account_id)?, date))
    }

    fn tasks_by_category(&self, account_id: &str, category: Category) -> Result<Vec<Task>> {
        Ok(task_filters::by_category(
            self.get_tasks(account_id)?,
            category,
        ))
    }

    fn tasks_by_priority(&self, account_id: &str, priority: Priority) -> Result<Vec<Task>> {
        Ok(task_filters::by_priority(
            self.get_tasks(account_id)?,
            priority,
        ))
    }

    fn tasks_by_completion(&self, account_id: &str, is_completed: bool) -> Result<Vec<Task>> {
        Ok(task_filters::by_completion(
            self.get_tasks(account_id)?,
            is_completed,
        ))
    }

    fn overdue_tasks(&self, account_id: &str, today: NaiveDate) -> Result<Vec<Task>> {
        Ok(task_filters::overdue(self.get_tasks(account_id)?, today))
    }

    fn tasks_occurring_on(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Task>> {
        Ok(task_filters::occurring_on(self.get_tasks(account_id)?, date))
    }

    /// Tasks occurring on any day of the Monday-start week containing `date`.
    /// A repeating task appears once.
    fn tasks_in_week(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Task>> {
        let week = week_dates(date);
        Ok(self
            .get_tasks(account_id)?
            .into_iter()
            .filter(|task| week.iter().any(|day| task.occurs_on(*day)))
            .collect())
    }

    fn daily_progress(&self, account_id: &str, date: NaiveDate) -> Result<f64> {
        let tasks = self.tasks_occurring_on(account_id, date)?;
        Ok(task_filters::completion_percentage(&tasks))
    }

    fn set_task_completed(&self, task_id: &str, is_completed: bool) -> Result<Task> {
        let mut task = self
            .repository
            .find_task(task_id)?
            .ok_or_else(|| NotFoundError::Task(task_id.to_string()))?;
        task.is_completed = is_completed;
        self.repository
            .update_task(task)?
            .ok_or_else(|| NotFoundError::Task(task_id.to_string()).into())
    }
}
