//! Rendering for the `synkr` subcommands.
//!
//! Every command returns its output as a string, either plain text or
//! pretty-printed JSON.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;
use synkr_core::accounts::Account;
use synkr_core::achievements::AchievementDefinition;
use synkr_core::goals::{Goal, GoalProgress};
use synkr_core::tasks::Task;

use crate::category_style::style_for;
use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodayView {
    date: NaiveDate,
    progress: f64,
    tasks: Vec<Task>,
    overdue: Vec<Task>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AchievementView {
    #[serde(flatten)]
    definition: AchievementDefinition,
    times_earned: usize,
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn task_line(out: &mut String, task: &Task) -> std::fmt::Result {
    let style = style_for(task.category);
    let slot = format!("{}-{}", task.start_time, task.end_time);
    writeln!(
        out,
        "  {} {:<16} {}  {} {}  {}",
        checkbox(task.is_completed),
        slot,
        task.name,
        style.icon,
        task.display_category(),
        task.priority.as_str()
    )
}

/// Tasks falling on `date` (repeats included), the day's progress and
/// everything still open from earlier days.
pub fn today(
    state: &AppState,
    account: &Account,
    date: NaiveDate,
    json: bool,
) -> anyhow::Result<String> {
    let view = TodayView {
        date,
        progress: state.task_service.daily_progress(&account.id, date)?,
        tasks: state.task_service.tasks_occurring_on(&account.id, date)?,
        overdue: state.task_service.overdue_tasks(&account.id, date)?,
    };
    if json {
        return to_json(&view);
    }

    let mut out = String::new();
    writeln!(
        out,
        "{} for {} ({:.0}% done)",
        account.name, view.date, view.progress
    )?;
    if view.tasks.is_empty() {
        writeln!(out, "  nothing scheduled")?;
    }
    for task in &view.tasks {
        task_line(&mut out, task)?;
    }
    if !view.overdue.is_empty() {
        writeln!(out, "Overdue")?;
        for task in &view.overdue {
            task_line(&mut out, task)?;
        }
    }
    Ok(out)
}

fn goal_header(out: &mut String, goal: &Goal, done: usize, total: usize) -> std::fmt::Result {
    let style = style_for(goal.category);
    writeln!(
        out,
        "{} {}  {:.2}%  {}/{} steps  due {}  ({})",
        style.icon,
        goal.name,
        goal.display_percentage(),
        done,
        total,
        goal.deadline,
        goal.id
    )
}

/// Every goal of the account with its steps.
pub fn goals(state: &AppState, account: &Account, json: bool) -> anyhow::Result<String> {
    let progress = state
        .goal_service
        .get_goals(&account.id)?
        .iter()
        .map(|goal| state.goal_service.goal_progress(&goal.id))
        .collect::<synkr_core::Result<Vec<GoalProgress>>>()?;
    if json {
        return to_json(&progress);
    }

    let mut out = String::new();
    if progress.is_empty() {
        writeln!(out, "No goals yet")?;
    }
    for entry in &progress {
        goal_header(
            &mut out,
            &entry.goal,
            entry.completed_steps,
            entry.total_steps,
        )?;
        for step in &entry.steps {
            writeln!(
                out,
                "  {} {}  ({})",
                checkbox(step.is_completed),
                step.name,
                step.id
            )?;
        }
    }
    Ok(out)
}

/// The achievement catalog with how often the account earned each entry.
pub fn achievements(state: &AppState, account: &Account, json: bool) -> anyhow::Result<String> {
    let views: Vec<AchievementView> = state
        .achievements
        .list_all_achievement_definitions()?
        .into_iter()
        .map(|definition| AchievementView {
            times_earned: account.times_earned(&definition.id),
            definition,
        })
        .collect();
    if json {
        return to_json(&views);
    }

    let mut out = String::new();
    writeln!(
        out,
        "Streak: {} days (best {})",
        account.streak.current, account.streak.max
    )?;
    for view in &views {
        let marker = if view.times_earned > 0 { "★" } else { "☆" };
        writeln!(
            out,
            "  {} {} x{}  {}",
            marker, view.definition.name, view.times_earned, view.definition.description
        )?;
    }
    Ok(out)
}

/// Marks a step of one of the account's goals completed and reports the
/// goal's new progress.
pub fn complete_step(
    state: &AppState,
    account: &Account,
    goal_id: &str,
    step_id: &str,
    json: bool,
) -> anyhow::Result<String> {
    if !account.owns_goal(goal_id) {
        anyhow::bail!("Goal '{}' does not belong to {}", goal_id, account.email);
    }
    let goal = state.goal_service.set_step_completed(goal_id, step_id, true)?;
    if json {
        return to_json(&goal);
    }
    let mut out = String::new();
    writeln!(
        out,
        "{} is now {:.2}% complete",
        goal.name,
        goal.display_percentage()
    )?;
    Ok(out)
}
