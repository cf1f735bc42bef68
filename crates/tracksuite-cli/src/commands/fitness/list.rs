//! The `fitdeck list` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};

use tracksuite_fitness::metrics::period_window;
use tracksuite_fitness::{FitnessTracker, GoalPeriod};

pub fn execute(
    data_dir: Option<PathBuf>,
    period: Option<GoalPeriod>,
    kind: Option<String>,
) -> Result<()> {
    let store = crate::open_store(data_dir);
    let tracker = FitnessTracker::load(store);

    let window = period.map(|p| period_window(p, Local::now().date_naive()));

    let mut table = Table::new();
    table.set_header(vec!["Id", "Date", "Type", "Minutes", "Calories", "Notes"]);

    let mut shown = 0usize;
    for activity in tracker.activities_by_date_desc() {
        if let Some((start, end)) = window {
            if activity.date < start || activity.date > end {
                continue;
            }
        }
        if let Some(kind) = &kind {
            if !activity.kind.eq_ignore_ascii_case(kind) {
                continue;
            }
        }
        table.add_row(vec![
            Cell::new(&activity.id),
            Cell::new(activity.date),
            Cell::new(&activity.kind),
            Cell::new(activity.duration),
            Cell::new(activity.calories),
            Cell::new(activity.notes.as_deref().unwrap_or("")),
        ]);
        shown += 1;
    }

    println!("{table}");
    println!("{shown} activities");
    Ok(())
}
