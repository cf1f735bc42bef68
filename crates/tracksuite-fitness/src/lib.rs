//! tracksuite-fitness — fitness activity and goal domain.
//!
//! Defines the activity/goal data model, the pure aggregate and
//! date-window helpers, and the [`FitnessTracker`] controller that owns
//! the collections and persists them through `tracksuite-store`.

pub mod metrics;
pub mod model;
pub mod quotes;
pub mod samples;
pub mod tracker;
pub mod validate;

pub use model::{FitnessActivity, FitnessGoal, GoalKind, GoalPeriod, ACTIVITY_TYPES};
pub use tracker::{FitnessTracker, TrackerError, ACTIVITIES_KEY, GOALS_KEY};
pub use validate::ValidationError;
