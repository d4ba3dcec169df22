use std::sync::Arc;

use synkr_core::accounts::{AccountService, AccountServiceTrait};
use synkr_core::achievements::AchievementRepositoryTrait;
use synkr_core::bootstrap::SampleDataBootstrap;
use synkr_core::goals::{GoalService, GoalServiceTrait};
use synkr_core::tasks::{TaskService, TaskServiceTrait};
use synkr_core::EntityStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::events::TracingEventSink;

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub task_service: Arc<dyn TaskServiceTrait>,
    pub goal_service: Arc<dyn GoalServiceTrait>,
    pub achievements: Arc<dyn AchievementRepositoryTrait>,
}

impl AppState {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(store.clone())),
            task_service: Arc::new(TaskService::new(store.clone())),
            goal_service: Arc::new(GoalService::new(store.clone())),
            achievements: store,
        }
    }
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let store = if config.seed_sample_data {
        EntityStore::with_bootstrap(Arc::new(SampleDataBootstrap::default()))
    } else {
        EntityStore::new()
    };
    let store = Arc::new(store.with_event_sink(Arc::new(TracingEventSink)));
    store.ensure_ready()?;
    tracing::info!(seeded = config.seed_sample_data, "Entity store ready");
    Ok(AppState::new(store))
}
