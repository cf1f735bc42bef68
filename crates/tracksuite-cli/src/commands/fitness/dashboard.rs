//! The `fitdeck dashboard` command: totals, the weekly calorie chart,
//! goal progress, and a motivational quote.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use tracksuite_fitness::metrics::{
    goal_progress, period_window, total_calories, total_duration, weekly_calorie_buckets,
    DAY_NAMES,
};
use tracksuite_fitness::quotes::random_quote;
use tracksuite_fitness::{FitnessTracker, GoalPeriod};

pub fn execute(data_dir: Option<PathBuf>) -> Result<()> {
    let store = crate::open_store(data_dir);
    let tracker = FitnessTracker::load(store);
    let today = Local::now().date_naive();

    let activities = tracker.activities();
    let (week_start, week_end) = period_window(GoalPeriod::Weekly, today);
    let this_week: Vec<_> = activities
        .iter()
        .filter(|a| a.date >= week_start && a.date <= week_end)
        .cloned()
        .collect();

    println!("\"{}\"\n", random_quote());

    println!(
        "All time:  {} activities, {} kcal, {} minutes",
        activities.len(),
        total_calories(activities),
        total_duration(activities)
    );
    println!(
        "This week: {} activities, {} kcal, {} minutes\n",
        this_week.len(),
        total_calories(&this_week),
        total_duration(&this_week)
    );

    let buckets = weekly_calorie_buckets(activities, today);
    let max = buckets.iter().copied().max().unwrap_or(0).max(1);
    println!("Calories this week:");
    for (day, calories) in DAY_NAMES.iter().zip(buckets) {
        let width = (calories * 40 / max) as usize;
        println!("  {day:<9} {:<40} {calories}", "#".repeat(width));
    }

    if !tracker.goals().is_empty() {
        println!("\nGoals:");
        for goal in tracker.goals() {
            let progress = goal_progress(goal, activities, today);
            println!(
                "  {} {} goal of {}: {progress:.1}%",
                goal.period, goal.kind, goal.target
            );
        }
    }

    Ok(())
}
