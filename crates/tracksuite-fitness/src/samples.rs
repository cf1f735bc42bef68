//! Built-in sample dataset, substituted when the store has no usable
//! `fitness-activities` or `fitness-goals` entry.

use chrono::{Days, Local, NaiveDate};

use crate::model::{FitnessActivity, FitnessGoal, GoalKind, GoalPeriod};

fn days_ago(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(n)).unwrap_or(today)
}

/// Three sample activities spread over the last three days.
pub fn sample_activities() -> Vec<FitnessActivity> {
    let today = Local::now().date_naive();
    vec![
        FitnessActivity {
            id: "1".into(),
            kind: "Running".into(),
            duration: 45,
            calories: 450,
            date: days_ago(today, 1),
            notes: Some("Morning run in the park".into()),
        },
        FitnessActivity {
            id: "2".into(),
            kind: "Weightlifting".into(),
            duration: 60,
            calories: 300,
            date: today,
            notes: Some("Leg day".into()),
        },
        FitnessActivity {
            id: "3".into(),
            kind: "Swimming".into(),
            duration: 30,
            calories: 350,
            date: days_ago(today, 2),
            notes: Some("Pool laps".into()),
        },
    ]
}

/// One sample goal: 2000 calories per week, starting today.
pub fn sample_goals() -> Vec<FitnessGoal> {
    vec![FitnessGoal {
        id: "1".into(),
        kind: GoalKind::CaloriesBurned,
        target: 2000,
        period: GoalPeriod::Weekly,
        start_date: Local::now().date_naive(),
    }]
}
