//! Record validation at the edges.
//!
//! Invalid submissions are surfaced synchronously and abort with state
//! unchanged; nothing downstream has to handle zero targets or empty
//! labels.

use thiserror::Error;

use crate::model::{FitnessActivity, FitnessGoal};

/// A rejected activity or goal submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("activity type must not be empty")]
    EmptyActivityKind,

    #[error("duration must be a positive number of minutes")]
    ZeroDuration,

    #[error("calories must be a positive number")]
    ZeroCalories,

    #[error("goal target must be a positive number")]
    ZeroTarget,
}

/// Validate an activity before it enters the collection.
pub fn validate_activity(activity: &FitnessActivity) -> Result<(), ValidationError> {
    if activity.kind.trim().is_empty() {
        return Err(ValidationError::EmptyActivityKind);
    }
    if activity.duration == 0 {
        return Err(ValidationError::ZeroDuration);
    }
    if activity.calories == 0 {
        return Err(ValidationError::ZeroCalories);
    }
    Ok(())
}

/// Validate a goal before it enters the collection.
pub fn validate_goal(goal: &FitnessGoal) -> Result<(), ValidationError> {
    if goal.target == 0 {
        return Err(ValidationError::ZeroTarget);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GoalKind, GoalPeriod};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    #[test]
    fn valid_activity_passes() {
        let activity = FitnessActivity::new("Running", 45, 450, today());
        assert!(validate_activity(&activity).is_ok());
    }

    #[test]
    fn blank_kind_rejected() {
        let activity = FitnessActivity::new("   ", 45, 450, today());
        assert_eq!(
            validate_activity(&activity),
            Err(ValidationError::EmptyActivityKind)
        );
    }

    #[test]
    fn zero_duration_and_calories_rejected() {
        let activity = FitnessActivity::new("Running", 0, 450, today());
        assert_eq!(validate_activity(&activity), Err(ValidationError::ZeroDuration));

        let activity = FitnessActivity::new("Running", 45, 0, today());
        assert_eq!(validate_activity(&activity), Err(ValidationError::ZeroCalories));
    }

    #[test]
    fn zero_target_goal_rejected() {
        let goal = FitnessGoal::new(GoalKind::CaloriesBurned, 0, GoalPeriod::Weekly, today());
        assert_eq!(validate_goal(&goal), Err(ValidationError::ZeroTarget));
    }
}
