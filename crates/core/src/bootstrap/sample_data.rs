//! Demo fixture: a small achievement catalog and one sample account.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use super::bootstrap_model::{SeedAccount, SeedData, SeedGoal, StoreBootstrap};
use crate::accounts::{Account, UsageCategory};
use crate::achievements::AchievementDefinition;
use crate::errors::Result;
use crate::goals::{Goal, Step};
use crate::tasks::{Alert, Category, Priority, Task};
use crate::utils::today_local;

pub const SAMPLE_EMAIL: &str = "dhruv@synkr.app";
pub const SAMPLE_CREDENTIAL: &str = "synkr-demo";

/// Name-based id for a fixture record, identical on every load.
fn fixture_id(kind: &str, key: &str) -> String {
    Uuid::new_v5(
        &Uuid::NAMESPACE_URL,
        format!("https://synkr.app/sample/{kind}/{key}").as_bytes(),
    )
    .to_string()
}

/// Seeds the demo catalog and sample account, dated relative to `today`.
#[derive(Debug, Clone)]
pub struct SampleDataBootstrap {
    today: NaiveDate,
}

impl Default for SampleDataBootstrap {
    fn default() -> Self {
        Self::new(today_local())
    }
}

impl SampleDataBootstrap {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    fn achievement_catalog() -> Vec<AchievementDefinition> {
        let catalog = vec![
            AchievementDefinition::new("First Step", "Complete your first task"),
            AchievementDefinition::new("Goal Getter", "Finish every step of a goal"),
            AchievementDefinition::new("Week Warrior", "Keep a seven day streak"),
            AchievementDefinition::new("Early Bird", "Finish a task before 8AM"),
            AchievementDefinition::new("Perfect Day", "Complete every task scheduled for a day"),
        ];
        catalog
            .into_iter()
            .map(|definition| AchievementDefinition {
                id: fixture_id("achievement", &definition.name),
                ..definition
            })
            .collect()
    }

    fn sample_account(&self) -> SeedAccount {
        let mut account = Account::new("Dhruv", SAMPLE_EMAIL, SAMPLE_CREDENTIAL);
        account.id = fixture_id("account", SAMPLE_EMAIL);
        account.phone = Some("+1 555 0100".to_string());
        account.settings.usage_category = UsageCategory::Student;

        let gym = Task {
            id: fixture_id("task", "gym"),
            description: "Workout session".to_string(),
            start_time: "5:00PM".to_string(),
            end_time: "6:30PM".to_string(),
            priority: Priority::High,
            is_completed: true,
            alert: Alert::OneHour,
            category: Category::Sports,
            ..Task::new("Go Gym and do some exercises", self.today)
        };
        let study = Task {
            id: fixture_id("task", "study"),
            description: "Study session".to_string(),
            start_time: "6:00PM".to_string(),
            end_time: "7:30PM".to_string(),
            priority: Priority::Medium,
            alert: Alert::OneHour,
            category: Category::Study,
            insights: Some(vec!["Review class notes before starting".to_string()]),
            ..Task::new("Study OOP in C++", self.today)
        };
        let meeting = Task {
            id: fixture_id("task", "meeting"),
            description: "Work discussion".to_string(),
            start_time: "10:00AM".to_string(),
            end_time: "11:30AM".to_string(),
            priority: Priority::High,
            alert: Alert::OneHour,
            category: Category::Work,
            ..Task::new("Attend a meeting", self.today)
        };

        let deadline = self
            .today
            .checked_add_days(Days::new(30))
            .unwrap_or(self.today);
        let goal = Goal {
            id: fixture_id("goal", "launch-portfolio"),
            description: "Ship a personal portfolio site".to_string(),
            priority: Priority::High,
            category: Category::Work,
            ..Goal::new("Launch portfolio", deadline)
        };
        let steps = vec![
            Step {
                id: fixture_id("step", "pick-a-design"),
                is_completed: true,
                ..Step::new("Pick a design")
            },
            Step {
                id: fixture_id("step", "write-the-content"),
                ..Step::new("Write the content")
            },
            Step {
                id: fixture_id("step", "deploy"),
                ..Step::new("Deploy")
            },
        ];

        SeedAccount {
            account,
            tasks: vec![gym, study, meeting],
            goals: vec![SeedGoal { goal, steps }],
        }
    }
}

impl StoreBootstrap for SampleDataBootstrap {
    fn load(&self) -> Result<SeedData> {
        Ok(SeedData {
            achievement_definitions: Self::achievement_catalog(),
            accounts: vec![self.sample_account()],
        })
    }
}
