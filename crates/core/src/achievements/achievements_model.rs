//! Achievement domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry describing an accomplishment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl AchievementDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A timestamped instance of an account earning a definition.
///
/// The same definition may be earned more than once; each grant is its own
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub id: String,
    pub definition_id: String,
    pub earned_at: DateTime<Utc>,
}

impl AchievementRecord {
    pub fn earned_now(definition_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            definition_id: definition_id.into(),
            earned_at: Utc::now(),
        }
    }
}
