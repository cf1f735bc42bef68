//! The `fitdeck export` command.

use std::path::PathBuf;

use anyhow::Result;

use tracksuite_fitness::{FitnessTracker, ACTIVITIES_KEY};
use tracksuite_store::export_pretty_json;

pub fn execute(data_dir: Option<PathBuf>, output: PathBuf) -> Result<()> {
    let store = crate::open_store(data_dir);
    let tracker = FitnessTracker::load(store);

    let path = export_pretty_json(&tracker.activities(), &output, ACTIVITIES_KEY)?;
    println!(
        "Exported {} activities to {}",
        tracker.activities().len(),
        path.display()
    );
    Ok(())
}
