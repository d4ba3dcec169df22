//! Tasks module - domain models, filters, services, and traits.

pub mod task_filters;
mod tasks_model;
mod tasks_service;
mod tasks_traits;

#[cfg(test)]
mod tasks_model_tests;


pub use tasks_model::{Alert, Category, Priority, RepeatFrequency, Task};
pub use tasks_service::TaskService;
pub use tasks_traits::{TaskRepositoryTrait, TaskServiceTrait};
