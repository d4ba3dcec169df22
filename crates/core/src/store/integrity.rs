//! Consistency checks over the whole store.

use std::collections::HashMap;

use serde::Serialize;

use super::store_state::StoreState;
use crate::goals::completion_percentage;

/// Allowed drift between a stored percentage and its recomputed value
const PERCENT_TOLERANCE: f64 = 1e-9;

/// A broken referential or derived-state rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityViolation {
    /// An account lists a task id that is not in the task collection.
    DanglingTaskId { account_id: String, task_id: String },
    /// An account lists a goal id that is not in the goal collection.
    DanglingGoalId { account_id: String, goal_id: String },
    /// A goal lists a step id that is not in the step collection.
    DanglingStepId { goal_id: String, step_id: String },
    /// A task is listed by zero or several accounts.
    TaskOwnership { task_id: String, owners: usize },
    /// A goal is listed by zero or several accounts.
    GoalOwnership { goal_id: String, owners: usize },
    /// A step is listed by zero or several goals.
    StepOwnership { step_id: String, owners: usize },
    /// A goal's stored percentage disagrees with its steps.
    StaleCompletion {
        goal_id: String,
        stored: f64,
        expected: f64,
    },
    /// Two accounts share an email.
    DuplicateEmail { email: String },
}

pub(crate) fn check(state: &StoreState) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    let mut task_owners: HashMap<&str, usize> = HashMap::new();
    let mut goal_owners: HashMap<&str, usize> = HashMap::new();
    let mut emails: HashMap<&str, usize> = HashMap::new();

    for account in &state.accounts {
        *emails.entry(account.email.as_str()).or_default() += 1;
        for task_id in &account.task_ids {
            *task_owners.entry(task_id.as_str()).or_default() += 1;
            if state.find_task(task_id).is_none() {
                violations.push(IntegrityViolation::DanglingTaskId {
                    account_id: account.id.clone(),
                    task_id: task_id.clone(),
                });
            }
        }
        for goal_id in &account.goal_ids {
            *goal_owners.entry(goal_id.as_str()).or_default() += 1;
            if state.find_goal(goal_id).is_none() {
                violations.push(IntegrityViolation::DanglingGoalId {
                    account_id: account.id.clone(),
                    goal_id: goal_id.clone(),
                });
            }
        }
    }

    for task in &state.tasks {
        let owners = task_owners.get(task.id.as_str()).copied().unwrap_or(0);
        if owners != 1 {
            violations.push(IntegrityViolation::TaskOwnership {
                task_id: task.id.clone(),
                owners,
            });
        }
    }

    let mut step_owners: HashMap<&str, usize> = HashMap::new();
    for goal in &state.goals {
        let owners = goal_owners.get(goal.id.as_str()).copied().unwrap_or(0);
        if owners != 1 {
            violations.push(IntegrityViolation::GoalOwnership {
                goal_id: goal.id.clone(),
                owners,
            });
        }
        for step_id in &goal.step_ids {
            *step_owners.entry(step_id.as_str()).or_default() += 1;
            if state.find_step(step_id).is_none() {
                violations.push(IntegrityViolation::DanglingStepId {
                    goal_id: goal.id.clone(),
                    step_id: step_id.clone(),
                });
            }
        }
        let expected = completion_percentage(
            goal.step_ids
                .iter()
                .filter_map(|step_id| state.find_step(step_id)),
        );
        if (goal.completion_percentage - expected).abs() > PERCENT_TOLERANCE {
            violations.push(IntegrityViolation::StaleCompletion {
                goal_id: goal.id.clone(),
                stored: goal.completion_percentage,
                expected,
            });
        }
    }

    for step in &state.steps {
        let owners = step_owners.get(step.id.as_str()).copied().unwrap_or(0);
        if owners != 1 {
            violations.push(IntegrityViolation::StepOwnership {
                step_id: step.id.clone(),
                owners,
            });
        }
    }

    for (email, count) in emails {
        if count > 1 {
            violations.push(IntegrityViolation::DuplicateEmail {
                email: email.to_string(),
            });
        }
    }

    violations
}
