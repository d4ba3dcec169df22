//! Account domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::achievements::AchievementRecord;
use crate::constants::{DEFAULT_BEDTIME, DEFAULT_WAKE_TIME};
use crate::{errors::ValidationError, Error, Result};

/// What the account mainly plans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum UsageCategory {
    #[default]
    Personal,
    Student,
    Work,
    Other,
}

/// Per-account preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub usage_category: UsageCategory,
    /// Time-of-day string, e.g. "11:00PM"
    pub bedtime: String,
    /// Time-of-day string, e.g. "7:00AM"
    pub wake_time: String,
    pub notifications_enabled: bool,
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            usage_category: UsageCategory::default(),
            bedtime: DEFAULT_BEDTIME.to_string(),
            wake_time: DEFAULT_WAKE_TIME.to_string(),
            notifications_enabled: true,
        }
    }
}

/// Consecutive-day counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    /// Days in the running streak
    pub current: u32,
    /// Longest streak ever reached
    pub max: u32,
}

impl Streak {
    /// Adds a day to the running streak, raising the historical max if needed.
    pub fn extend(&mut self) {
        self.current = self.current.saturating_add(1);
        self.max = self.max.max(self.current);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// A registered user and the root of ownership for tasks, goals and
/// achievement records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Unique across all accounts at sign-up
    pub email: String,
    /// Opaque secret compared verbatim by `authenticate`. Never serialized.
    #[serde(skip_serializing, default)]
    pub credential: String,
    pub phone: Option<String>,
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub task_ids: Vec<String>,
    #[serde(default)]
    pub goal_ids: Vec<String>,
    #[serde(default)]
    pub streak: Streak,
    #[serde(default)]
    pub settings: AccountSettings,
    #[serde(default)]
    pub achievements: Vec<AchievementRecord>,
}

impl Account {
    /// Creates an account with a fresh id, default settings and no
    /// owned entities.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            credential: credential.into(),
            ..Default::default()
        }
    }

    pub fn owns_goal(&self, goal_id: &str) -> bool {
        self.goal_ids.iter().any(|id| id == goal_id)
    }

    /// How many times the account has earned the given definition.
    pub fn times_earned(&self, definition_id: &str) -> usize {
        self.achievements
            .iter()
            .filter(|record| record.definition_id == definition_id)
            .count()
    }
}

/// Input model for signing up a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub credential: String,
    pub phone: Option<String>,
    pub settings: Option<AccountSettings>,
}

impl NewAccount {
    /// Validates the sign-up form data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "email".to_string(),
            )));
        }
        if !self.email.contains('@') {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "'{}' is not an email address",
                self.email
            ))));
        }
        if self.credential.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "credential".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the account record, minting an id when none was supplied.
    pub fn into_account(self) -> Account {
        Account {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            credential: self.credential,
            phone: self.phone,
            settings: self.settings.unwrap_or_default(),
            ..Default::default()
        }
    }
}
