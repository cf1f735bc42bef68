//! The `fitdeck goal` subcommands.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};

use tracksuite_fitness::metrics::goal_progress;
use tracksuite_fitness::{FitnessGoal, FitnessTracker, GoalKind, GoalPeriod};

pub fn add(
    data_dir: Option<PathBuf>,
    kind: GoalKind,
    target: u32,
    period: GoalPeriod,
) -> Result<()> {
    let store = crate::open_store(data_dir);
    let mut tracker = FitnessTracker::load(store);

    let goal = FitnessGoal::new(kind, target, period, Local::now().date_naive());
    let id = goal.id.clone();
    tracker.add_goal(goal)?;
    println!("Set {period} {kind} goal {id}");
    Ok(())
}

pub fn list(data_dir: Option<PathBuf>) -> Result<()> {
    let store = crate::open_store(data_dir);
    let tracker = FitnessTracker::load(store);
    let today = Local::now().date_naive();

    let mut table = Table::new();
    table.set_header(vec!["Id", "Goal", "Period", "Target", "Progress"]);

    for goal in tracker.goals() {
        let progress = goal_progress(goal, tracker.activities(), today);
        table.add_row(vec![
            Cell::new(&goal.id),
            Cell::new(goal.kind),
            Cell::new(goal.period),
            Cell::new(goal.target),
            Cell::new(format!("{progress:.1}%")),
        ]);
    }

    println!("{table}");
    Ok(())
}

pub fn delete(data_dir: Option<PathBuf>, id: String) -> Result<()> {
    let store = crate::open_store(data_dir);
    let mut tracker = FitnessTracker::load(store);
    tracker.delete_goal(&id)?;
    println!("Deleted goal {id}");
    Ok(())
}
