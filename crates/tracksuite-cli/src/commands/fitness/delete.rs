//! The `fitdeck delete` command.

use std::path::PathBuf;

use anyhow::Result;

use tracksuite_fitness::FitnessTracker;

pub fn execute(data_dir: Option<PathBuf>, id: String) -> Result<()> {
    let store = crate::open_store(data_dir);
    let mut tracker = FitnessTracker::load(store);
    tracker.delete_activity(&id)?;
    println!("Deleted activity {id}");
    Ok(())
}
