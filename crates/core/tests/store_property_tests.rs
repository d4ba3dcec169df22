//! Property-based tests for the entity store.
//!
//! Random operation sequences are replayed against a fresh store, and the
//! referential-integrity and completion-percentage rules are checked after
//! every step, including steps that are expected to fail.

use chrono::NaiveDate;
use proptest::prelude::*;
use synkr_core::accounts::{Account, AccountRepositoryTrait};
use synkr_core::achievements::{AchievementDefinition, AchievementRepositoryTrait};
use synkr_core::goals::{Goal, GoalRepositoryTrait, Step};
use synkr_core::tasks::{Task, TaskRepositoryTrait};
use synkr_core::{EntityStore, Error};

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    CreateAccount { email: u8 },
    UpdateAccount { account: u8, email: u8 },
    GrantAchievement { account: u8, known: bool },
    CreateTask { account: u8 },
    UpdateTask { task: u8, completed: bool },
    DeleteTask { task: u8, account: u8 },
    CreateGoal { account: u8 },
    UpdateGoal { goal: u8 },
    DeleteGoal { goal: u8, account: u8 },
    AddStep { goal: u8, completed: bool },
    UpdateStep { step: u8, goal: u8, completed: bool },
    RemoveStep { step: u8, goal: u8 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![
            (0u8..4).prop_map(|email| Op::CreateAccount { email }),
            (any::<u8>(), 0u8..4)
                .prop_map(|(account, email)| Op::UpdateAccount { account, email }),
            (any::<u8>(), any::<bool>())
                .prop_map(|(account, known)| Op::GrantAchievement { account, known }),
        ],
        any::<u8>().prop_map(|account| Op::CreateTask { account }),
        (any::<u8>(), any::<bool>()).prop_map(|(task, completed)| Op::UpdateTask { task, completed }),
        (any::<u8>(), any::<u8>()).prop_map(|(task, account)| Op::DeleteTask { task, account }),
        any::<u8>().prop_map(|account| Op::CreateGoal { account }),
        any::<u8>().prop_map(|goal| Op::UpdateGoal { goal }),
        (any::<u8>(), any::<u8>()).prop_map(|(goal, account)| Op::DeleteGoal { goal, account }),
        (any::<u8>(), any::<bool>()).prop_map(|(goal, completed)| Op::AddStep { goal, completed }),
        (any::<u8>(), any::<u8>(), any::<bool>())
            .prop_map(|(step, goal, completed)| Op::UpdateStep { step, goal, completed }),
        (any::<u8>(), any::<u8>()).prop_map(|(step, goal)| Op::RemoveStep { step, goal }),
    ]
}

// =============================================================================
// Harness
// =============================================================================

/// Every id ever handed out, including deleted ones, so operations also hit
/// unknown and mis-addressed ids.
#[derive(Default)]
struct Ids {
    definition: String,
    accounts: Vec<String>,
    tasks: Vec<String>,
    goals: Vec<String>,
    steps: Vec<String>,
}

fn pick(ids: &[String], index: u8) -> String {
    if ids.is_empty() {
        return "missing".to_string();
    }
    ids[index as usize % ids.len()].clone()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn apply(store: &EntityStore, ids: &mut Ids, op: &Op) -> Result<(), Error> {
    match op {
        Op::CreateAccount { email } => {
            let account = Account::new("user", format!("user{email}@x.com"), "pw");
            let created = store.create_account(account)?;
            ids.accounts.push(created.id);
        }
        Op::UpdateAccount { account, email } => {
            if let Some(stored) = store.find_account_by_id(&pick(&ids.accounts, *account))? {
                store.update_account(Account {
                    name: "renamed".to_string(),
                    email: format!("user{email}@x.com"),
                    task_ids: Vec::new(),
                    goal_ids: Vec::new(),
                    ..stored
                })?;
            }
        }
        Op::GrantAchievement { account, known } => {
            let definition = if *known {
                ids.definition.clone()
            } else {
                "missing".to_string()
            };
            store.grant_achievement(&pick(&ids.accounts, *account), &definition)?;
        }
        Op::CreateTask { account } => {
            let task = Task::new("task", day());
            let id = task.id.clone();
            // Only record the id once the store accepted it
            store.create_task(task, &pick(&ids.accounts, *account))?;
            ids.tasks.push(id);
        }
        Op::UpdateTask { task, completed } => {
            if let Some(mut stored) = store.find_task(&pick(&ids.tasks, *task))? {
                stored.is_completed = *completed;
                store.update_task(stored)?;
            }
        }
        Op::DeleteTask { task, account } => {
            store.delete_task(&pick(&ids.tasks, *task), &pick(&ids.accounts, *account))?;
        }
        Op::CreateGoal { account } => {
            let goal = Goal::new("goal", day());
            let id = goal.id.clone();
            store.create_goal(goal, &pick(&ids.accounts, *account))?;
            ids.goals.push(id);
        }
        Op::UpdateGoal { goal } => {
            let mut edited = Goal::new("renamed", day());
            edited.id = pick(&ids.goals, *goal);
            edited.completion_percentage = 42.0;
            store.update_goal(edited)?;
        }
        Op::DeleteGoal { goal, account } => {
            store.delete_goal(&pick(&ids.goals, *goal), &pick(&ids.accounts, *account))?;
        }
        Op::AddStep { goal, completed } => {
            let step = Step {
                is_completed: *completed,
                ..Step::new("step")
            };
            let id = step.id.clone();
            store.add_step(step, &pick(&ids.goals, *goal))?;
            ids.steps.push(id);
        }
        Op::UpdateStep {
            step,
            goal,
            completed,
        } => {
            let mut edited = Step::new("edited");
            edited.id = pick(&ids.steps, *step);
            edited.is_completed = *completed;
            store.update_step(edited, &pick(&ids.goals, *goal))?;
        }
        Op::RemoveStep { step, goal } => {
            store.remove_step(&pick(&ids.steps, *step), &pick(&ids.goals, *goal))?;
        }
    }
    Ok(())
}

/// Checks the percentage law through the public query surface.
fn percentage_law_holds(store: &EntityStore, ids: &Ids) -> bool {
    ids.goals.iter().all(|goal_id| {
        let Some(goal) = store.find_goal(goal_id).unwrap() else {
            return true;
        };
        let steps = store.list_steps(goal_id).unwrap();
        let expected = if steps.is_empty() {
            0.0
        } else {
            let done = steps.iter().filter(|s| s.is_completed).count();
            100.0 * done as f64 / steps.len() as f64
        };
        (goal.completion_percentage - expected).abs() < 1e-9
    })
}

fn owned_task_count(store: &EntityStore, ids: &Ids) -> usize {
    ids.accounts
        .iter()
        .map(|id| store.list_tasks(id).unwrap().len())
        .sum()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Referential integrity and the percentage law hold after every
    /// operation, whether it succeeded or failed.
    #[test]
    fn prop_store_stays_consistent(ops in proptest::collection::vec(arb_op(), 1..60)) {
        let store = EntityStore::new();
        let definition = store
            .create_achievement_definition(AchievementDefinition::new("Streak", "3 days"))
            .unwrap();
        let mut ids = Ids {
            definition: definition.id,
            ..Ids::default()
        };

        for op in &ops {
            let tasks_before = owned_task_count(&store, &ids);
            let accounts_before = store.list_accounts().unwrap();
            let outcome = apply(&store, &mut ids, op);

            let violations = store.verify_integrity().unwrap();
            prop_assert!(violations.is_empty(), "after {:?}: {:?}", op, violations);
            prop_assert!(percentage_law_holds(&store, &ids), "after {:?}", op);

            if outcome.is_err() {
                if matches!(op, Op::CreateTask { .. }) {
                    prop_assert_eq!(owned_task_count(&store, &ids), tasks_before);
                }
                if matches!(op, Op::UpdateAccount { .. } | Op::GrantAchievement { .. }) {
                    prop_assert_eq!(store.list_accounts().unwrap(), accounts_before);
                }
            }
        }
    }

    /// Updating a task twice with the same value is the same as updating once.
    #[test]
    fn prop_update_task_is_idempotent(completed in any::<bool>(), name in "[a-z]{1,12}") {
        let store = EntityStore::new();
        let account = store.create_account(Account::new("a", "a@x.com", "pw")).unwrap();
        let task = store.create_task(Task::new("t", day()), &account.id).unwrap();
        let edited = Task { name, is_completed: completed, ..task };

        store.update_task(edited.clone()).unwrap();
        let once = store.list_tasks(&account.id).unwrap();
        store.update_task(edited).unwrap();
        prop_assert_eq!(store.list_tasks(&account.id).unwrap(), once);
    }
}
