//! Pure aggregate and date-window helpers over the activity collection.
//!
//! All helpers take `today` explicitly so callers (and tests) control the
//! reference date; the CLI passes `Local::now().date_naive()`.

use chrono::{Datelike, Days, NaiveDate};

use crate::model::{FitnessActivity, FitnessGoal, GoalKind, GoalPeriod};

/// Weekday names, Sunday first, matching the weekly bucket order.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Total calories burned across `activities`.
pub fn total_calories(activities: &[FitnessActivity]) -> u64 {
    activities.iter().map(|a| u64::from(a.calories)).sum()
}

/// Total duration in minutes across `activities`.
pub fn total_duration(activities: &[FitnessActivity]) -> u64 {
    activities.iter().map(|a| u64::from(a.duration)).sum()
}

/// The inclusive calendar window for a goal period, relative to `today`.
///
/// Daily is just today; weekly is the Sunday-to-Saturday week containing
/// today; monthly is the first-to-last day of today's month.
pub fn period_window(period: GoalPeriod, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        GoalPeriod::Daily => (today, today),
        GoalPeriod::Weekly => {
            let offset = today.weekday().num_days_from_sunday() as u64;
            let start = today.checked_sub_days(Days::new(offset)).unwrap_or(today);
            let end = start.checked_add_days(Days::new(6)).unwrap_or(today);
            (start, end)
        }
        GoalPeriod::Monthly => {
            let first = today.with_day(1).unwrap_or(today);
            let next_month = if today.month() == 12 {
                NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
            };
            let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(today);
            (first, last)
        }
    }
}

/// Activities whose date falls inside the inclusive `[start, end]` window.
pub fn activities_in_window<'a>(
    activities: &'a [FitnessActivity],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a FitnessActivity> {
    activities
        .iter()
        .filter(|a| a.date >= start && a.date <= end)
        .collect()
}

/// Per-weekday calorie totals for the week containing `today`,
/// Sunday first. Feeds the dashboard chart.
pub fn weekly_calorie_buckets(activities: &[FitnessActivity], today: NaiveDate) -> [u64; 7] {
    let (start, end) = period_window(GoalPeriod::Weekly, today);
    let mut buckets = [0u64; 7];
    for activity in activities {
        if activity.date >= start && activity.date <= end {
            let day = activity.date.weekday().num_days_from_sunday() as usize;
            buckets[day] += u64::from(activity.calories);
        }
    }
    buckets
}

/// Progress toward a goal as a percentage, clamped to `[0, 100]`.
///
/// Sums calories or minutes over the goal's evaluation window. A zero
/// target is excluded by input validation and is not handled here.
pub fn goal_progress(goal: &FitnessGoal, activities: &[FitnessActivity], today: NaiveDate) -> f64 {
    let (start, end) = period_window(goal.period, today);
    let achieved: u64 = activities
        .iter()
        .filter(|a| a.date >= start && a.date <= end)
        .map(|a| match goal.kind {
            GoalKind::CaloriesBurned => u64::from(a.calories),
            GoalKind::DurationMinutes => u64::from(a.duration),
        })
        .sum();

    (achieved as f64 / f64::from(goal.target) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(date: NaiveDate, calories: u32, duration: u32) -> FitnessActivity {
        FitnessActivity {
            id: uuid::Uuid::new_v4().to_string(),
            kind: "Running".into(),
            duration,
            calories,
            date,
            notes: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn totals_sum_over_all_activities() {
        let activities = vec![
            activity(date(2026, 3, 2), 450, 45),
            activity(date(2026, 3, 3), 300, 60),
        ];
        assert_eq!(total_calories(&activities), 750);
        assert_eq!(total_duration(&activities), 105);
    }

    #[test]
    fn weekly_window_is_sunday_to_saturday() {
        // 2026-03-04 is a Wednesday; its week runs Sun 03-01 .. Sat 03-07.
        let (start, end) = period_window(GoalPeriod::Weekly, date(2026, 3, 4));
        assert_eq!(start, date(2026, 3, 1));
        assert_eq!(end, date(2026, 3, 7));
    }

    #[test]
    fn weekly_window_on_sunday_starts_same_day() {
        let (start, end) = period_window(GoalPeriod::Weekly, date(2026, 3, 1));
        assert_eq!(start, date(2026, 3, 1));
        assert_eq!(end, date(2026, 3, 7));
    }

    #[test]
    fn monthly_window_covers_whole_month() {
        let (start, end) = period_window(GoalPeriod::Monthly, date(2026, 2, 10));
        assert_eq!(start, date(2026, 2, 1));
        assert_eq!(end, date(2026, 2, 28));

        let (start, end) = period_window(GoalPeriod::Monthly, date(2026, 12, 25));
        assert_eq!(start, date(2026, 12, 1));
        assert_eq!(end, date(2026, 12, 31));
    }

    #[test]
    fn daily_window_is_single_day() {
        let today = date(2026, 3, 4);
        assert_eq!(period_window(GoalPeriod::Daily, today), (today, today));
    }

    #[test]
    fn window_filter_is_inclusive() {
        let activities = vec![
            activity(date(2026, 3, 1), 100, 10),
            activity(date(2026, 3, 7), 200, 20),
            activity(date(2026, 3, 8), 400, 40),
        ];
        let selected = activities_in_window(&activities, date(2026, 3, 1), date(2026, 3, 7));
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn weekly_buckets_key_by_weekday() {
        let today = date(2026, 3, 4); // Wednesday
        let activities = vec![
            activity(date(2026, 3, 1), 100, 10), // Sunday
            activity(date(2026, 3, 4), 250, 25), // Wednesday
            activity(date(2026, 3, 4), 50, 5),   // Wednesday again
            activity(date(2026, 2, 25), 999, 9), // previous week, ignored
        ];
        let buckets = weekly_calorie_buckets(&activities, today);
        assert_eq!(buckets[0], 100);
        assert_eq!(buckets[3], 300);
        assert_eq!(buckets.iter().sum::<u64>(), 400);
    }

    #[test]
    fn progress_weekly_calories() {
        // 1100 of 2000 weekly calories = 55.0%.
        let today = date(2026, 3, 4);
        let goal = FitnessGoal {
            id: "g".into(),
            kind: GoalKind::CaloriesBurned,
            target: 2000,
            period: GoalPeriod::Weekly,
            start_date: date(2026, 3, 1),
        };
        let activities = vec![
            activity(date(2026, 3, 2), 450, 45),
            activity(date(2026, 3, 3), 300, 60),
            activity(date(2026, 3, 4), 350, 30),
        ];
        let progress = goal_progress(&goal, &activities, today);
        assert!((progress - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_clamps_at_100() {
        let today = date(2026, 3, 4);
        let goal = FitnessGoal {
            id: "g".into(),
            kind: GoalKind::DurationMinutes,
            target: 60,
            period: GoalPeriod::Daily,
            start_date: today,
        };
        let activities = vec![activity(today, 500, 240)];
        assert_eq!(goal_progress(&goal, &activities, today), 100.0);
    }

    #[test]
    fn progress_ignores_activities_outside_window() {
        let today = date(2026, 3, 4);
        let goal = FitnessGoal {
            id: "g".into(),
            kind: GoalKind::CaloriesBurned,
            target: 1000,
            period: GoalPeriod::Daily,
            start_date: today,
        };
        let activities = vec![activity(date(2026, 3, 3), 900, 90)];
        assert_eq!(goal_progress(&goal, &activities, today), 0.0);
    }
}
