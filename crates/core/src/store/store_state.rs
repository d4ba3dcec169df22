//! Collections and linked mutations behind the store lock.
//!
//! Every mutating method checks all of its preconditions before it touches
//! a collection, so an `Err` always leaves the state unchanged. Events are
//! queued only once a mutation has fully applied.

use std::collections::HashSet;

use log::debug;

use crate::accounts::Account;
use crate::achievements::{AchievementDefinition, AchievementRecord};
use crate::bootstrap::SeedData;
use crate::errors::{AlreadyExistsError, NotFoundError, Result};
use crate::events::StoreEvent;
use crate::goals::{completion_percentage, Goal, Step};
use crate::tasks::Task;

#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    pub(crate) accounts: Vec<Account>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) goals: Vec<Goal>,
    pub(crate) steps: Vec<Step>,
    pub(crate) definitions: Vec<AchievementDefinition>,
    /// Id of the signed-in account; resolved on every read
    pub(crate) session_account_id: Option<String>,
    pending_events: Vec<StoreEvent>,
}

impl StoreState {
    pub(crate) fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn account_index(&self, account_id: &str) -> Result<usize> {
        self.accounts
            .iter()
            .position(|a| a.id == account_id)
            .ok_or_else(|| NotFoundError::Account(account_id.to_string()).into())
    }

    fn goal_index(&self, goal_id: &str) -> Result<usize> {
        self.goals
            .iter()
            .position(|g| g.id == goal_id)
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()).into())
    }

    // ---------------------------------------------------------------------
    // Accounts and session
    // ---------------------------------------------------------------------

    pub(crate) fn find_account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == account_id)
    }

    pub(crate) fn account_exists(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.email == email)
    }

    pub(crate) fn insert_account(&mut self, mut account: Account) -> Result<Account> {
        if self.account_exists(&account.email) {
            return Err(AlreadyExistsError::Email(account.email).into());
        }
        if self.find_account(&account.id).is_some() {
            return Err(AlreadyExistsError::Account(account.id).into());
        }
        account.task_ids.clear();
        account.goal_ids.clear();
        account.achievements.clear();
        self.accounts.push(account.clone());
        debug!("Created account {}", account.id);
        self.pending_events.push(StoreEvent::AccountCreated {
            account_id: account.id.clone(),
        });
        Ok(account)
    }

    /// Replaces caller-editable fields. Ownership lists and earned records
    /// stay as stored. The email must stay unique across accounts.
    pub(crate) fn replace_account(&mut self, account: Account) -> Result<Option<Account>> {
        if self
            .accounts
            .iter()
            .any(|a| a.email == account.email && a.id != account.id)
        {
            return Err(AlreadyExistsError::Email(account.email).into());
        }
        let Some(stored) = self.accounts.iter_mut().find(|a| a.id == account.id) else {
            return Ok(None);
        };
        let Account {
            task_ids,
            goal_ids,
            achievements,
            ..
        } = std::mem::take(stored);
        *stored = Account {
            task_ids,
            goal_ids,
            achievements,
            ..account
        };
        let updated = stored.clone();
        self.pending_events.push(StoreEvent::AccountUpdated {
            account_id: updated.id.clone(),
        });
        Ok(Some(updated))
    }

    pub(crate) fn authenticate(&mut self, email: &str, credential: &str) -> Option<Account> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.email == email && a.credential == credential)?
            .clone();
        self.session_account_id = Some(account.id.clone());
        self.pending_events
            .push(StoreEvent::session_changed(Some(account.id.clone())));
        Some(account)
    }

    pub(crate) fn current_account(&self) -> Option<Account> {
        let id = self.session_account_id.as_deref()?;
        self.find_account(id).cloned()
    }

    pub(crate) fn sign_out(&mut self) {
        if self.session_account_id.take().is_some() {
            self.pending_events.push(StoreEvent::session_changed(None));
        }
    }

    // ---------------------------------------------------------------------
    // Tasks
    // ---------------------------------------------------------------------

    pub(crate) fn tasks_for(&self, account_id: &str) -> Vec<Task> {
        let Some(account) = self.find_account(account_id) else {
            return Vec::new();
        };
        let owned: HashSet<&str> = account.task_ids.iter().map(String::as_str).collect();
        self.tasks
            .iter()
            .filter(|t| owned.contains(t.id.as_str()))
            .cloned()
            .collect()
    }

    pub(crate) fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub(crate) fn insert_task(&mut self, task: Task, account_id: &str) -> Result<Task> {
        let owner = self.account_index(account_id)?;
        if self.find_task(&task.id).is_some() {
            return Err(AlreadyExistsError::Task(task.id).into());
        }
        self.accounts[owner].task_ids.push(task.id.clone());
        self.tasks.push(task.clone());
        debug!("Created task {} for account {}", task.id, account_id);
        self.pending_events.push(StoreEvent::TaskCreated {
            account_id: account_id.to_string(),
            task_id: task.id.clone(),
        });
        Ok(task)
    }

    pub(crate) fn replace_task(&mut self, task: Task) -> Option<Task> {
        let stored = self.tasks.iter_mut().find(|t| t.id == task.id)?;
        *stored = task.clone();
        self.pending_events.push(StoreEvent::TaskUpdated {
            task_id: task.id.clone(),
        });
        Some(task)
    }

    /// Removes the task and purges its id from every account, not only the
    /// named one.
    pub(crate) fn remove_task(&mut self, task_id: &str, account_id: &str) -> Result<()> {
        self.account_index(account_id)?;
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        let removed = before != self.tasks.len();

        let mut unlinked = Vec::new();
        for account in &mut self.accounts {
            let owned = account.task_ids.len();
            account.task_ids.retain(|id| id != task_id);
            if account.task_ids.len() != owned {
                unlinked.push(account.id.clone());
            }
        }

        if removed || !unlinked.is_empty() {
            debug!("Deleted task {} (unlinked from {:?})", task_id, unlinked);
            self.pending_events.push(StoreEvent::TaskDeleted {
                account_ids: unlinked,
                task_id: task_id.to_string(),
            });
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Goals
    // ---------------------------------------------------------------------

    pub(crate) fn goals_for(&self, account_id: &str) -> Vec<Goal> {
        let Some(account) = self.find_account(account_id) else {
            return Vec::new();
        };
        let owned: HashSet<&str> = account.goal_ids.iter().map(String::as_str).collect();
        self.goals
            .iter()
            .filter(|g| owned.contains(g.id.as_str()))
            .cloned()
            .collect()
    }

    pub(crate) fn find_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// New goals start without steps; steps are attached with `insert_step`.
    pub(crate) fn insert_goal(&mut self, mut goal: Goal, account_id: &str) -> Result<Goal> {
        let owner = self.account_index(account_id)?;
        if self.find_goal(&goal.id).is_some() {
            return Err(AlreadyExistsError::Goal(goal.id).into());
        }
        goal.step_ids.clear();
        goal.completion_percentage = 0.0;
        self.accounts[owner].goal_ids.push(goal.id.clone());
        self.goals.push(goal.clone());
        debug!("Created goal {} for account {}", goal.id, account_id);
        self.pending_events.push(StoreEvent::GoalCreated {
            account_id: account_id.to_string(),
            goal_id: goal.id.clone(),
        });
        Ok(goal)
    }

    /// Replaces caller-editable fields. The step list and the derived
    /// percentage stay as stored.
    pub(crate) fn replace_goal(&mut self, goal: Goal) -> Option<Goal> {
        let stored = self.goals.iter_mut().find(|g| g.id == goal.id)?;
        let step_ids = std::mem::take(&mut stored.step_ids);
        *stored = Goal {
            step_ids,
            completion_percentage: stored.completion_percentage,
            ..goal
        };
        let updated = stored.clone();
        self.pending_events.push(StoreEvent::GoalUpdated {
            goal_id: updated.id.clone(),
        });
        Some(updated)
    }

    /// Removes the goal and its steps, and purges its id from every account.
    pub(crate) fn remove_goal(&mut self, goal_id: &str, account_id: &str) -> Result<()> {
        self.account_index(account_id)?;
        let removed = self.goals.iter().position(|g| g.id == goal_id);
        let step_ids = removed
            .map(|position| self.goals.remove(position).step_ids)
            .unwrap_or_default();
        let orphaned: HashSet<&str> = step_ids.iter().map(String::as_str).collect();
        self.steps.retain(|s| !orphaned.contains(s.id.as_str()));

        let mut unlinked = Vec::new();
        for account in &mut self.accounts {
            let owned = account.goal_ids.len();
            account.goal_ids.retain(|id| id != goal_id);
            if account.goal_ids.len() != owned {
                unlinked.push(account.id.clone());
            }
        }

        if removed.is_some() || !unlinked.is_empty() {
            debug!(
                "Deleted goal {} with {} steps (unlinked from {:?})",
                goal_id,
                step_ids.len(),
                unlinked
            );
            self.pending_events.push(StoreEvent::GoalDeleted {
                account_ids: unlinked,
                goal_id: goal_id.to_string(),
                step_ids,
            });
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Steps
    // ---------------------------------------------------------------------

    pub(crate) fn steps_for(&self, goal_id: &str) -> Vec<Step> {
        let Some(goal) = self.find_goal(goal_id) else {
            return Vec::new();
        };
        let owned: HashSet<&str> = goal.step_ids.iter().map(String::as_str).collect();
        self.steps
            .iter()
            .filter(|s| owned.contains(s.id.as_str()))
            .cloned()
            .collect()
    }

    pub(crate) fn find_step(&self, step_id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == step_id)
    }

    pub(crate) fn insert_step(&mut self, step: Step, goal_id: &str) -> Result<Goal> {
        let goal_index = self.goal_index(goal_id)?;
        if self.find_step(&step.id).is_some() {
            return Err(AlreadyExistsError::Step(step.id).into());
        }
        self.goals[goal_index].step_ids.push(step.id.clone());
        self.steps.push(step);
        Ok(self.recompute_completion(goal_index))
    }

    /// Replaces the step, then recomputes `goal_id` and any other goal that
    /// lists the step.
    pub(crate) fn replace_step(&mut self, step: Step, goal_id: &str) -> Result<Goal> {
        let goal_index = self.goal_index(goal_id)?;
        let stored = self
            .steps
            .iter_mut()
            .find(|s| s.id == step.id)
            .ok_or_else(|| NotFoundError::Step(step.id.clone()))?;
        *stored = step;
        let step_id = stored.id.clone();
        self.recompute_listing(&step_id, goal_index);
        Ok(self.recompute_completion(goal_index))
    }

    /// Removes the step from the collection and from every goal that lists it.
    pub(crate) fn remove_step(&mut self, step_id: &str, goal_id: &str) -> Result<Goal> {
        let goal_index = self.goal_index(goal_id)?;
        self.steps.retain(|s| s.id != step_id);
        let listing: Vec<usize> = self
            .goals
            .iter()
            .enumerate()
            .filter(|(_, g)| g.step_ids.iter().any(|id| id == step_id))
            .map(|(index, _)| index)
            .collect();
        for index in listing {
            self.goals[index].step_ids.retain(|id| id != step_id);
            if index != goal_index {
                self.recompute_completion(index);
            }
        }
        Ok(self.recompute_completion(goal_index))
    }

    fn recompute_listing(&mut self, step_id: &str, skip: usize) {
        let listing: Vec<usize> = self
            .goals
            .iter()
            .enumerate()
            .filter(|(index, g)| *index != skip && g.step_ids.iter().any(|id| id == step_id))
            .map(|(index, _)| index)
            .collect();
        for index in listing {
            self.recompute_completion(index);
        }
    }

    /// Recomputes a goal's percentage from its full current step set.
    fn recompute_completion(&mut self, goal_index: usize) -> Goal {
        let percentage = {
            let goal = &self.goals[goal_index];
            let steps = goal
                .step_ids
                .iter()
                .filter_map(|id| self.steps.iter().find(|s| &s.id == id));
            completion_percentage(steps)
        };
        let goal = &mut self.goals[goal_index];
        goal.completion_percentage = percentage;
        self.pending_events
            .push(StoreEvent::goal_progress_changed(goal.id.clone(), percentage));
        goal.clone()
    }

    // ---------------------------------------------------------------------
    // Achievements
    // ---------------------------------------------------------------------

    pub(crate) fn find_definition(&self, definition_id: &str) -> Option<&AchievementDefinition> {
        self.definitions.iter().find(|d| d.id == definition_id)
    }

    pub(crate) fn insert_definition(
        &mut self,
        definition: AchievementDefinition,
    ) -> Result<AchievementDefinition> {
        if self.find_definition(&definition.id).is_some() {
            return Err(AlreadyExistsError::AchievementDefinition(definition.id).into());
        }
        self.definitions.push(definition.clone());
        Ok(definition)
    }

    pub(crate) fn earned_definitions(&self, account_id: &str) -> Vec<AchievementDefinition> {
        let Some(account) = self.find_account(account_id) else {
            return Vec::new();
        };
        account
            .achievements
            .iter()
            .filter_map(|record| self.find_definition(&record.definition_id))
            .cloned()
            .collect()
    }

    pub(crate) fn grant(
        &mut self,
        account_id: &str,
        definition_id: &str,
    ) -> Result<AchievementRecord> {
        let owner = self.account_index(account_id)?;
        if self.find_definition(definition_id).is_none() {
            return Err(NotFoundError::AchievementDefinition(definition_id.to_string()).into());
        }
        let record = AchievementRecord::earned_now(definition_id);
        self.accounts[owner].achievements.push(record.clone());
        debug!(
            "Granted achievement {} to account {}",
            definition_id, account_id
        );
        self.pending_events.push(StoreEvent::AchievementGranted {
            account_id: account_id.to_string(),
            definition_id: definition_id.to_string(),
            record_id: record.id.clone(),
        });
        Ok(record)
    }

    // ---------------------------------------------------------------------
    // Bootstrap
    // ---------------------------------------------------------------------

    /// Loads fixture data through the same linked inserts callers use.
    pub(crate) fn apply_seed(&mut self, seed: SeedData) -> Result<()> {
        for definition in seed.achievement_definitions {
            self.insert_definition(definition)?;
        }
        for mut entry in seed.accounts {
            let earned = std::mem::take(&mut entry.account.achievements);
            let account = self.insert_account(entry.account)?;
            let owner = self.account_index(&account.id)?;
            // Fixture history is restored verbatim, unresolved records included
            self.accounts[owner].achievements = earned;
            for task in entry.tasks {
                self.insert_task(task, &account.id)?;
            }
            for seeded_goal in entry.goals {
                let goal = self.insert_goal(seeded_goal.goal, &account.id)?;
                for step in seeded_goal.steps {
                    self.insert_step(step, &goal.id)?;
                }
            }
        }
        self.pending_events.clear();
        Ok(())
    }
}
