//! The `fitdeck log` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use tracksuite_fitness::{FitnessActivity, FitnessTracker};

pub fn execute(
    data_dir: Option<PathBuf>,
    kind: String,
    duration: u32,
    calories: u32,
    date: Option<NaiveDate>,
    notes: Option<String>,
) -> Result<()> {
    let store = crate::open_store(data_dir);
    let mut tracker = FitnessTracker::load(store);

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let mut activity = FitnessActivity::new(kind, duration, calories, date);
    if let Some(notes) = notes {
        activity = activity.with_notes(notes);
    }
    let id = activity.id.clone();

    tracker.add_activity(activity)?;
    println!("Logged activity {id}");
    Ok(())
}
