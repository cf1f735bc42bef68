//! Fitness data model types.
//!
//! Field names on the wire are camelCase to stay compatible with the
//! JSON collections the applications have always persisted.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Suggested activity-type labels. The label itself is free-form; these
/// only seed pickers and documentation.
pub const ACTIVITY_TYPES: &[&str] = &[
    "Running",
    "Walking",
    "Cycling",
    "Swimming",
    "Weightlifting",
    "Yoga",
    "HIIT",
    "Basketball",
    "Soccer",
    "Tennis",
    "Dancing",
    "Pilates",
    "Hiking",
    "Rowing",
    "Elliptical",
];

/// A single logged workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessActivity {
    /// Unique identifier.
    pub id: String,
    /// Activity-type label (e.g. "Running").
    #[serde(rename = "type")]
    pub kind: String,
    /// Duration in minutes.
    pub duration: u32,
    /// Calories burned.
    pub calories: u32,
    /// Calendar date of the workout (no time component).
    pub date: NaiveDate,
    /// Optional free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FitnessActivity {
    /// Create a new activity with a fresh id.
    pub fn new(kind: impl Into<String>, duration: u32, calories: u32, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: kind.into(),
            duration,
            calories,
            date,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// What a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalKind {
    CaloriesBurned,
    DurationMinutes,
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalKind::CaloriesBurned => write!(f, "calories"),
            GoalKind::DurationMinutes => write!(f, "duration"),
        }
    }
}

impl FromStr for GoalKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "calories" | "caloriesburned" => Ok(GoalKind::CaloriesBurned),
            "duration" | "durationminutes" | "minutes" => Ok(GoalKind::DurationMinutes),
            other => Err(format!("unknown goal kind: {other}")),
        }
    }
}

/// The evaluation window a goal is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalPeriod::Daily => write!(f, "daily"),
            GoalPeriod::Weekly => write!(f, "weekly"),
            GoalPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for GoalPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" | "day" => Ok(GoalPeriod::Daily),
            "weekly" | "week" => Ok(GoalPeriod::Weekly),
            "monthly" | "month" => Ok(GoalPeriod::Monthly),
            other => Err(format!("unknown goal period: {other}")),
        }
    }
}

/// A fitness goal. Progress is always recomputed from the live activity
/// collection, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessGoal {
    /// Unique identifier.
    pub id: String,
    /// What the goal measures.
    #[serde(rename = "type")]
    pub kind: GoalKind,
    /// Numeric target (calories or minutes, per `kind`).
    pub target: u32,
    /// Evaluation window.
    pub period: GoalPeriod,
    /// When the goal was set.
    pub start_date: NaiveDate,
}

impl FitnessGoal {
    /// Create a new goal with a fresh id, starting today per the caller.
    pub fn new(kind: GoalKind, target: u32, period: GoalPeriod, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            target,
            period,
            start_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_kind_display_and_parse() {
        assert_eq!(GoalKind::CaloriesBurned.to_string(), "calories");
        assert_eq!("calories".parse::<GoalKind>().unwrap(), GoalKind::CaloriesBurned);
        assert_eq!(
            "durationMinutes".parse::<GoalKind>().unwrap(),
            GoalKind::DurationMinutes
        );
        assert!("steps".parse::<GoalKind>().is_err());
    }

    #[test]
    fn goal_period_parse_aliases() {
        assert_eq!("week".parse::<GoalPeriod>().unwrap(), GoalPeriod::Weekly);
        assert_eq!("Monthly".parse::<GoalPeriod>().unwrap(), GoalPeriod::Monthly);
        assert!("fortnight".parse::<GoalPeriod>().is_err());
    }

    #[test]
    fn activity_wire_format_is_camel_case() {
        let activity = FitnessActivity {
            id: "1".into(),
            kind: "Running".into(),
            duration: 45,
            calories: 450,
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            notes: Some("Morning run".into()),
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "Running");
        assert_eq!(json["date"], "2026-03-14");
        assert_eq!(json["calories"], 450);
    }

    #[test]
    fn goal_wire_format_matches_legacy_names() {
        let goal = FitnessGoal {
            id: "1".into(),
            kind: GoalKind::CaloriesBurned,
            target: 2000,
            period: GoalPeriod::Weekly,
            start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        };
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["type"], "caloriesBurned");
        assert_eq!(json["period"], "weekly");
        assert_eq!(json["startDate"], "2026-03-01");
    }

    #[test]
    fn activity_notes_roundtrip_when_absent() {
        let activity = FitnessActivity::new("Yoga", 30, 120, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        let json = serde_json::to_string(&activity).unwrap();
        assert!(!json.contains("notes"));
        let back: FitnessActivity = serde_json::from_str(&json).unwrap();
        assert!(back.notes.is_none());
    }
}
