use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;

use crate::errors::{NotFoundError, Result};
use crate::goals::goals_model::{Goal, GoalProgress};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goals(&self, account_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.list_goals(account_id)
    }

    fn goal_progress(&self, goal_id: &str) -> Result<GoalProgress> {
        let goal = self
            .goal_repo
            .find_goal(goal_id)?
            .ok_or_else(|| NotFoundError::Goal(goal_id.to_string()))?;
        let steps = self.goal_repo.list_steps(goal_id)?;
        let completed_steps = steps.iter().filter(|s| s.is_completed).count();
        Ok(GoalProgress {
            goal,
            total_steps: steps.len(),
            completed_steps,
            steps,
        })
    }

    fn set_step_completed(
        &self,
        goal_id: &str,
        step_id: &str,
        is_completed: bool,
    ) -> Result<Goal> {
        let mut step = self
            .goal_repo
            .find_step(step_id)?
            .ok_or_else(|| NotFoundError::Step(step_id.to_string()))?;
        step.is_completed = is_completed;
        let goal = self.goal_repo.update_step(step, goal_id)?;
        debug!(
            "Goal {} now at {:.2}%",
            goal.id, goal.completion_percentage
        );
        Ok(goal)
    }

    fn goals_due_by(&self, account_id: &str, date: NaiveDate) -> Result<Vec<Goal>> {
        let mut goals: Vec<Goal> = self
            .goal_repo
            .list_goals(account_id)?
            .into_iter()
            .filter(|g| g.deadline <= date && !g.is_complete())
            .collect();
        goals.sort_by_key(|g| g.deadline);
        Ok(goals)
    }
}
