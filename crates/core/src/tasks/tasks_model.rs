//! Task domain models.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Importance of a task or goal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// How long before a task starts its reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Alert {
    #[default]
    None,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
}

impl Alert {
    /// Reminder lead time, or `None` when no reminder is set.
    pub fn lead_time(&self) -> Option<Duration> {
        let minutes = match self {
            Alert::None => return None,
            Alert::FiveMinutes => 5,
            Alert::TenMinutes => 10,
            Alert::FifteenMinutes => 15,
            Alert::ThirtyMinutes => 30,
            Alert::OneHour => 60,
        };
        Some(Duration::minutes(minutes))
    }
}

/// Closed set of task and goal categories.
///
/// Display metadata (colour, icon, label) belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Sports,
    Study,
    Work,
    Meetings,
    Habits,
    #[default]
    Others,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Sports,
        Category::Study,
        Category::Work,
        Category::Meetings,
        Category::Habits,
        Category::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sports => "sports",
            Category::Study => "study",
            Category::Work => "work",
            Category::Meetings => "meetings",
            Category::Habits => "habits",
            Category::Others => "others",
        }
    }
}

/// Recurrence rule of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum RepeatFrequency {
    #[default]
    None,
    Daily,
    Weekly,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl RepeatFrequency {
    /// The fixed weekday for the named-day rules.
    pub fn weekday(&self) -> Option<Weekday> {
        match self {
            RepeatFrequency::Monday => Some(Weekday::Mon),
            RepeatFrequency::Tuesday => Some(Weekday::Tue),
            RepeatFrequency::Wednesday => Some(Weekday::Wed),
            RepeatFrequency::Thursday => Some(Weekday::Thu),
            RepeatFrequency::Friday => Some(Weekday::Fri),
            RepeatFrequency::Saturday => Some(Weekday::Sat),
            RepeatFrequency::Sunday => Some(Weekday::Sun),
            RepeatFrequency::None | RepeatFrequency::Daily | RepeatFrequency::Weekly => None,
        }
    }
}

/// A single scheduled, actionable item.
///
/// Ownership is recorded on the account (`Account::task_ids`); the task
/// itself carries no back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Time-of-day string, e.g. "5:00PM"
    pub start_time: String,
    pub end_time: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub repeat: RepeatFrequency,
    pub priority: Priority,
    pub is_completed: bool,
    pub alert: Alert,
    pub category: Category,
    /// Free-text label shown instead of `category` when set
    pub custom_category: Option<String>,
    pub insights: Option<Vec<String>>,
}

impl Task {
    /// Creates an incomplete, non-repeating task with a fresh id.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            date,
            ..Default::default()
        }
    }

    /// Label to show for the task's category.
    pub fn display_category(&self) -> &str {
        self.custom_category
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| self.category.as_str())
    }

    /// Scheduled strictly before `today` and still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.date < today && !self.is_completed
    }

    /// Whether the task falls on `date`, either directly or through its
    /// repeat rule. Repeats never reach back before the task's own date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        if date == self.date {
            return true;
        }
        if date < self.date {
            return false;
        }
        match self.repeat {
            RepeatFrequency::None => false,
            RepeatFrequency::Daily => true,
            RepeatFrequency::Weekly => date.weekday() == self.date.weekday(),
            named => named.weekday() == Some(date.weekday()),
        }
    }
}
