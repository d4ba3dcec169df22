//! Store event types.

use serde::{Deserialize, Serialize};

/// Facts about store mutations, emitted after the mutation is visible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    AccountCreated {
        account_id: String,
    },

    AccountUpdated {
        account_id: String,
    },

    /// The signed-in account changed. `None` after sign-out.
    SessionChanged {
        account_id: Option<String>,
    },

    TaskCreated {
        account_id: String,
        task_id: String,
    },

    TaskUpdated {
        task_id: String,
    },

    TaskDeleted {
        account_ids: Vec<String>,
        task_id: String,
    },

    GoalCreated {
        account_id: String,
        goal_id: String,
    },

    GoalUpdated {
        goal_id: String,
    },

    GoalDeleted {
        account_ids: Vec<String>,
        goal_id: String,
        /// Steps removed along with the goal
        step_ids: Vec<String>,
    },

    /// A goal's completion percentage was recomputed after a step change.
    GoalProgressChanged {
        goal_id: String,
        completion_percentage: f64,
    },

    AchievementGranted {
        account_id: String,
        definition_id: String,
        record_id: String,
    },
}

impl StoreEvent {
    pub fn session_changed(account_id: Option<String>) -> Self {
        Self::SessionChanged { account_id }
    }

    pub fn goal_progress_changed(goal_id: impl Into<String>, completion_percentage: f64) -> Self {
        Self::GoalProgressChanged {
            goal_id: goal_id.into(),
            completion_percentage,
        }
    }

    /// The account an event is scoped to, when it names exactly one.
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Self::AccountCreated { account_id }
            | Self::AccountUpdated { account_id }
            | Self::TaskCreated { account_id, .. }
            | Self::GoalCreated { account_id, .. }
            | Self::AchievementGranted { account_id, .. } => Some(account_id),
            Self::SessionChanged { account_id } => account_id.as_deref(),
            Self::TaskUpdated { .. }
            | Self::TaskDeleted { .. }
            | Self::GoalUpdated { .. }
            | Self::GoalDeleted { .. }
            | Self::GoalProgressChanged { .. } => None,
        }
    }
}
