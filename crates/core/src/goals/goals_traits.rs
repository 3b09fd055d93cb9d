//! Goal repository and service traits.

use chrono::NaiveDate;

use super::goals_model::{Goal, GoalProgress};
use crate::errors::Result;

/// Trait defining the contract for goal read operations.
pub trait GoalRepositoryTrait: Send + Sync {
    /// Returns the owner's savings goals, newest first.
    fn get_goals(&self) -> Result<Vec<Goal>>;
}

/// Trait defining the contract for goal service operations.
pub trait GoalServiceTrait: Send + Sync {
    /// Returns progress for every goal, measured against `reference`.
    fn get_goal_progress(&self, reference: NaiveDate) -> Result<Vec<GoalProgress>>;
}
