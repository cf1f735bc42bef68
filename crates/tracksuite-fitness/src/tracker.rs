//! The fitness application-state controller.
//!
//! `FitnessTracker` owns the activity and goal collections. Every
//! mutation validates its input, builds a replacement collection, writes
//! the whole namespace back to the store, and only then commits the new
//! collection in memory. There is no partial in-place mutation.

use thiserror::Error;

use tracksuite_store::{JsonStore, StoreError};

use crate::model::{FitnessActivity, FitnessGoal};
use crate::samples;
use crate::validate::{validate_activity, validate_goal, ValidationError};

/// Store namespace for the activity collection.
pub const ACTIVITIES_KEY: &str = "fitness-activities";

/// Store namespace for the goal collection.
pub const GOALS_KEY: &str = "fitness-goals";

/// Errors surfaced by tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("no activity with id '{0}'")]
    UnknownActivity(String),

    #[error("no goal with id '{0}'")]
    UnknownGoal(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the fitness collections and their persistence.
#[derive(Debug)]
pub struct FitnessTracker {
    store: JsonStore,
    activities: Vec<FitnessActivity>,
    goals: Vec<FitnessGoal>,
}

impl FitnessTracker {
    /// Load both collections from the store, falling back to the
    /// built-in samples when a namespace is absent or malformed.
    pub fn load(store: JsonStore) -> Self {
        let activities = store.load_or_else(ACTIVITIES_KEY, samples::sample_activities);
        let goals = store.load_or_else(GOALS_KEY, samples::sample_goals);
        tracing::debug!(
            activities = activities.len(),
            goals = goals.len(),
            "fitness tracker loaded"
        );
        Self {
            store,
            activities,
            goals,
        }
    }

    pub fn activities(&self) -> &[FitnessActivity] {
        &self.activities
    }

    pub fn goals(&self) -> &[FitnessGoal] {
        &self.goals
    }

    /// Activities in display order: date descending, insertion order
    /// preserved within a date.
    pub fn activities_by_date_desc(&self) -> Vec<&FitnessActivity> {
        let mut sorted: Vec<&FitnessActivity> = self.activities.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn find_activity(&self, id: &str) -> Option<&FitnessActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Append a validated activity and persist the collection.
    pub fn add_activity(&mut self, activity: FitnessActivity) -> Result<(), TrackerError> {
        validate_activity(&activity)?;
        let mut next = self.activities.clone();
        next.push(activity);
        self.store.save(ACTIVITIES_KEY, &next)?;
        self.activities = next;
        Ok(())
    }

    /// Replace the activity with the same id wholesale.
    pub fn update_activity(&mut self, activity: FitnessActivity) -> Result<(), TrackerError> {
        validate_activity(&activity)?;
        if !self.activities.iter().any(|a| a.id == activity.id) {
            return Err(TrackerError::UnknownActivity(activity.id));
        }
        let next: Vec<FitnessActivity> = self
            .activities
            .iter()
            .map(|a| {
                if a.id == activity.id {
                    activity.clone()
                } else {
                    a.clone()
                }
            })
            .collect();
        self.store.save(ACTIVITIES_KEY, &next)?;
        self.activities = next;
        Ok(())
    }

    /// Delete an activity by id and persist the collection.
    pub fn delete_activity(&mut self, id: &str) -> Result<(), TrackerError> {
        if !self.activities.iter().any(|a| a.id == id) {
            return Err(TrackerError::UnknownActivity(id.to_string()));
        }
        let next: Vec<FitnessActivity> = self
            .activities
            .iter()
            .filter(|a| a.id != id)
            .cloned()
            .collect();
        self.store.save(ACTIVITIES_KEY, &next)?;
        self.activities = next;
        Ok(())
    }

    /// Append a validated goal and persist the collection.
    pub fn add_goal(&mut self, goal: FitnessGoal) -> Result<(), TrackerError> {
        validate_goal(&goal)?;
        let mut next = self.goals.clone();
        next.push(goal);
        self.store.save(GOALS_KEY, &next)?;
        self.goals = next;
        Ok(())
    }

    /// Replace the goal with the same id wholesale.
    pub fn update_goal(&mut self, goal: FitnessGoal) -> Result<(), TrackerError> {
        validate_goal(&goal)?;
        if !self.goals.iter().any(|g| g.id == goal.id) {
            return Err(TrackerError::UnknownGoal(goal.id));
        }
        let next: Vec<FitnessGoal> = self
            .goals
            .iter()
            .map(|g| if g.id == goal.id { goal.clone() } else { g.clone() })
            .collect();
        self.store.save(GOALS_KEY, &next)?;
        self.goals = next;
        Ok(())
    }

    /// Delete a goal by id and persist the collection.
    pub fn delete_goal(&mut self, id: &str) -> Result<(), TrackerError> {
        if !self.goals.iter().any(|g| g.id == id) {
            return Err(TrackerError::UnknownGoal(id.to_string()));
        }
        let next: Vec<FitnessGoal> = self.goals.iter().filter(|g| g.id != id).cloned().collect();
        self.store.save(GOALS_KEY, &next)?;
        self.goals = next;
        Ok(())
    }
}
