#[cfg(test)]
mod tests {
    use crate::accounts::{Account, AccountRepositoryTrait};
    use crate::errors::{Error, NotFoundError};
    use crate::goals::{Goal, GoalRepositoryTrait, GoalService, GoalServiceTrait, Step};
    use crate::store::EntityStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn setup() -> (Arc<EntityStore>, GoalService, String) {
        let store = Arc::new(EntityStore::new());
        let account = store
            .create_account(Account::new("Ada", "a@x.com", "secret1"))
            .unwrap();
        let service = GoalService::new(store.clone());
        (store, service, account.id)
    }

    #[test]
    fn test_goal_progress_counts_steps() {
        let (store, service, account_id) = setup();
        let goal = store
            .create_goal(Goal::new("Marathon", date(9, 1)), &account_id)
            .unwrap();
        store
            .add_step(
                Step {
                    is_completed: true,
                    ..Step::new("10k")
                },
                &goal.id,
            )
            .unwrap();
        store.add_step(Step::new("Half"), &goal.id).unwrap();

        let progress = service.goal_progress(&goal.id).unwrap();
        assert_eq!(progress.total_steps, 2);
        assert_eq!(progress.completed_steps, 1);
        assert_eq!(progress.goal.completion_percentage, 50.0);
        assert_eq!(progress.steps[0].name, "10k");
    }

    #[test]
    fn test_goal_progress_unknown_goal() {
        let (_, service, _) = setup();
        assert_eq!(
            service.goal_progress("missing").unwrap_err(),
            Error::NotFound(NotFoundError::Goal("missing".to_string()))
        );
    }

    #[test]
    fn test_set_step_completed_recomputes() {
        let (store, service, account_id) = setup();
        let goal = store
            .create_goal(Goal::new("Marathon", date(9, 1)), &account_id)
            .unwrap();
        let step = Step::new("10k");
        store.add_step(step.clone(), &goal.id).unwrap();
        store.add_step(Step::new("Half"), &goal.id).unwrap();

        let updated = service.set_step_completed(&goal.id, &step.id, true).unwrap();
        assert_eq!(updated.completion_percentage, 50.0);

        let updated = service.set_step_completed(&goal.id, &step.id, false).unwrap();
        assert_eq!(updated.completion_percentage, 0.0);

        assert!(matches!(
            service.set_step_completed(&goal.id, "missing", true),
            Err(Error::NotFound(NotFoundError::Step(_)))
        ));
    }

    #[test]
    fn test_goals_due_by_sorts_and_skips_complete() {
        let (store, service, account_id) = setup();
        let later = store
            .create_goal(Goal::new("Later", date(6, 20)), &account_id)
            .unwrap();
        let sooner = store
            .create_goal(Goal::new("Sooner", date(6, 10)), &account_id)
            .unwrap();
        store
            .create_goal(Goal::new("Far", date(12, 1)), &account_id)
            .unwrap();
        let finished = store
            .create_goal(Goal::new("Finished", date(6, 1)), &account_id)
            .unwrap();
        store
            .add_step(
                Step {
                    is_completed: true,
                    ..Step::new("done")
                },
                &finished.id,
            )
            .unwrap();

        let due: Vec<String> = service
            .goals_due_by(&account_id, date(6, 30))
            .unwrap()
            .into_iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(due, vec![sooner.id, later.id]);
    }
}
