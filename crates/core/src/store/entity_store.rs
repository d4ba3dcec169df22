//! The single-lock entity store.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, warn};

use super::integrity::{self, IntegrityViolation};
use super::store_state::StoreState;
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::achievements::{AchievementDefinition, AchievementRecord, AchievementRepositoryTrait};
use crate::bootstrap::StoreBootstrap;
use crate::errors::{Error, Result};
use crate::events::{NoOpStoreEventSink, StoreEventSink};
use crate::goals::{Goal, GoalRepositoryTrait, Step};
use crate::tasks::{Task, TaskRepositoryTrait};

/// Store lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// A bootstrap is configured but has not been applied yet.
    Uninitialized,
    Ready,
}

struct StoreInner {
    lifecycle: Lifecycle,
    state: StoreState,
}

/// Sole owner of accounts, tasks, goals, steps and achievement definitions.
///
/// All operations run under one mutex guarding every collection and the
/// session, so each operation is atomic with respect to the others. Entities
/// go in and come out by value; callers never alias stored records.
///
/// Store events are emitted after the lock is released.
pub struct EntityStore {
    inner: Mutex<StoreInner>,
    bootstrap: Option<Arc<dyn StoreBootstrap>>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Creates an empty store that is immediately ready.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                lifecycle: Lifecycle::Ready,
                state: StoreState::default(),
            }),
            bootstrap: None,
            event_sink: Arc::new(NoOpStoreEventSink),
        }
    }

    /// Creates a store that seeds itself from `bootstrap` on first access.
    pub fn with_bootstrap(bootstrap: Arc<dyn StoreBootstrap>) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                lifecycle: Lifecycle::Uninitialized,
                state: StoreState::default(),
            }),
            bootstrap: Some(bootstrap),
            event_sink: Arc::new(NoOpStoreEventSink),
        }
    }

    /// Sets the event sink for store events.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn StoreEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Current lifecycle, without triggering the bootstrap.
    pub fn lifecycle(&self) -> Result<Lifecycle> {
        Ok(self.raw_lock()?.lifecycle)
    }

    /// Applies the bootstrap now if it has not run yet.
    pub fn ensure_ready(&self) -> Result<()> {
        self.lock().map(|_| ())
    }

    /// Returns every referential or derived-state violation. Empty when the
    /// store is consistent.
    pub fn verify_integrity(&self) -> Result<Vec<IntegrityViolation>> {
        self.read(integrity::check)
    }

    fn raw_lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|e| Error::Unavailable(e.to_string()))
    }

    /// Acquires the store lock, running the bootstrap exactly once.
    ///
    /// The seed is applied to a scratch copy and swapped in only on success,
    /// so a failed seed leaves the store empty and still uninitialized.
    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        let mut guard = self.raw_lock()?;
        if guard.lifecycle == Lifecycle::Uninitialized {
            if let Some(bootstrap) = &self.bootstrap {
                let mut seeded = guard.state.clone();
                let applied = bootstrap
                    .load()
                    .and_then(|seed| seeded.apply_seed(seed));
                if let Err(e) = applied {
                    warn!("Store bootstrap failed: {}", e);
                    return Err(e);
                }
                guard.state = seeded;
                debug!(
                    "Store bootstrapped with {} accounts and {} achievement definitions",
                    guard.state.accounts.len(),
                    guard.state.definitions.len()
                );
            }
            guard.lifecycle = Lifecycle::Ready;
        }
        Ok(guard)
    }

    fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> Result<R> {
        let guard = self.lock()?;
        Ok(f(&guard.state))
    }

    /// Runs a mutation under the lock, then emits its events unlocked.
    /// Concurrent writers may therefore deliver batches out of order.
    fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> Result<R>) -> Result<R> {
        let (result, events) = {
            let mut guard = self.lock()?;
            let result = f(&mut guard.state);
            (result, guard.state.drain_events())
        };
        if !events.is_empty() {
            self.event_sink.emit_batch(events);
        }
        result
    }
}

impl AccountRepositoryTrait for EntityStore {
    fn find_account_by_id(&self, account_id: &str) -> Result<Option<Account>> {
        self.read(|state| state.find_account(account_id).cloned())
    }

    fn account_exists(&self, email: &str) -> Result<bool> {
        self.read(|state| state.account_exists(email))
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        self.read(|state| state.accounts.clone())
    }

    fn create_account(&self, account: Account) -> Result<Account> {
        self.write(|state| state.insert_account(account))
    }

    fn update_account(&self, account: Account) -> Result<Option<Account>> {
        self.write(|state| state.replace_account(account))
    }

    fn authenticate(&self, email: &str, credential: &str) -> Result<Option<Account>> {
        self.write(|state| Ok(state.authenticate(email, credential)))
    }

    fn current_account(&self) -> Result<Option<Account>> {
        self.read(StoreState::current_account)
    }

    fn sign_out(&self) -> Result<()> {
        self.write(|state| {
            state.sign_out();
            Ok(())
        })
    }
}

impl TaskRepositoryTrait for EntityStore {
    fn list_tasks(&self, account_id: &str) -> Result<Vec<Task>> {
        self.read(|state| state.tasks_for(account_id))
    }

    fn find_task(&self, task_id: &str) -> Result<Option<Task>> {
        self.read(|state| state.find_task(task_id).cloned())
    }

    fn create_task(&self, task: Task, account_id: &str) -> Result<Task> {
        self.write(|state| state.insert_task(task, account_id))
    }

    fn update_task(&self, task: Task) -> Result<Option<Task>> {
        self.write(|state| Ok(state.replace_task(task)))
    }

    fn delete_task(&self, task_id: &str, account_id: &str) -> Result<()> {
        self.write(|state| state.remove_task(task_id, account_id))
    }
}

impl GoalRepositoryTrait for EntityStore {
    fn list_goals(&self, account_id: &str) -> Result<Vec<Goal>> {
        self.read(|state| state.goals_for(account_id))
    }

    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        self.read(|state| state.find_goal(goal_id).cloned())
    }

    fn create_goal(&self, goal: Goal, account_id: &str) -> Result<Goal> {
        self.write(|state| state.insert_goal(goal, account_id))
    }

    fn update_goal(&self, goal: Goal) -> Result<Option<Goal>> {
        self.write(|state| Ok(state.replace_goal(goal)))
    }

    fn delete_goal(&self, goal_id: &str, account_id: &str) -> Result<()> {
        self.write(|state| state.remove_goal(goal_id, account_id))
    }

    fn list_steps(&self, goal_id: &str) -> Result<Vec<Step>> {
        self.read(|state| state.steps_for(goal_id))
    }

    fn find_step(&self, step_id: &str) -> Result<Option<Step>> {
        self.read(|state| state.find_step(step_id).cloned())
    }

    fn add_step(&self, step: Step, goal_id: &str) -> Result<Goal> {
        self.write(|state| state.insert_step(step, goal_id))
    }

    fn update_step(&self, step: Step, goal_id: &str) -> Result<Goal> {
        self.write(|state| state.replace_step(step, goal_id))
    }

    fn remove_step(&self, step_id: &str, goal_id: &str) -> Result<Goal> {
        self.write(|state| state.remove_step(step_id, goal_id))
    }
}

impl AchievementRepositoryTrait for EntityStore {
    fn list_all_achievement_definitions(&self) -> Result<Vec<AchievementDefinition>> {
        self.read(|state| state.definitions.clone())
    }

    fn find_achievement_definition(
        &self,
        definition_id: &str,
    ) -> Result<Option<AchievementDefinition>> {
        self.read(|state| state.find_definition(definition_id).cloned())
    }

    fn create_achievement_definition(
        &self,
        definition: AchievementDefinition,
    ) -> Result<AchievementDefinition> {
        self.write(|state| state.insert_definition(definition))
    }

    fn list_earned_achievements(&self, account_id: &str) -> Result<Vec<AchievementDefinition>> {
        self.read(|state| state.earned_definitions(account_id))
    }

    fn grant_achievement(
        &self,
        account_id: &str,
        definition_id: &str,
    ) -> Result<AchievementRecord> {
        self.write(|state| state.grant(account_id, definition_id))
    }
}
