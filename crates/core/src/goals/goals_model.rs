//! Goals domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DISPLAY_PERCENT_PRECISION, FULL_COMPLETION_PERCENT};
use crate::tasks::{Category, Priority};
use crate::utils::round_percent;

/// Domain model representing a deadline-bound, multi-step goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub deadline: NaiveDate,
    pub priority: Priority,
    pub description: String,
    /// Derived from the goal's steps; maintained by the store
    pub completion_percentage: f64,
    pub category: Category,
    #[serde(default)]
    pub step_ids: Vec<String>,
}

impl Goal {
    pub fn new(name: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            deadline,
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completion_percentage >= FULL_COMPLETION_PERCENT
    }

    /// Completion rounded for display, e.g. 33.33
    pub fn display_percentage(&self) -> f64 {
        round_percent(self.completion_percentage, DISPLAY_PERCENT_PRECISION)
    }
}

/// A checklist item belonging to exactly one goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_completed: bool,
}

impl Step {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A goal together with its resolved steps
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal: Goal,
    pub steps: Vec<Step>,
    pub completed_steps: usize,
    pub total_steps: usize,
}

/// `100 * completed / total` with real division, or 0 for an empty step set.
pub fn completion_percentage<'a, I>(steps: I) -> f64
where
    I: IntoIterator<Item = &'a Step>,
{
    let (completed, total) = steps.into_iter().fold((0usize, 0usize), |(done, all), step| {
        (done + usize::from(step.is_completed), all + 1)
    });
    if total == 0 {
        return 0.0;
    }
    FULL_COMPLETION_PERCENT * completed as f64 / total as f64
}
