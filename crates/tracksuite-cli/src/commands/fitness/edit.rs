//! The `fitdeck edit` command. Unspecified fields keep their value; the
//! stored record is replaced wholesale.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tracksuite_fitness::FitnessTracker;

#[allow(clippy::too_many_arguments)]
pub fn execute(
    data_dir: Option<PathBuf>,
    id: String,
    kind: Option<String>,
    duration: Option<u32>,
    calories: Option<u32>,
    date: Option<NaiveDate>,
    notes: Option<String>,
) -> Result<()> {
    let store = crate::open_store(data_dir);
    let mut tracker = FitnessTracker::load(store);

    let mut activity = tracker
        .find_activity(&id)
        .with_context(|| format!("no activity with id '{id}'"))?
        .clone();

    if let Some(kind) = kind {
        activity.kind = kind;
    }
    if let Some(duration) = duration {
        activity.duration = duration;
    }
    if let Some(calories) = calories {
        activity.calories = calories;
    }
    if let Some(date) = date {
        activity.date = date;
    }
    if let Some(notes) = notes {
        activity.notes = Some(notes);
    }

    tracker.update_activity(activity)?;
    println!("Updated activity {id}");
    Ok(())
}
