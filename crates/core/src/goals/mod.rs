//! Goals module - savings goal models, progress, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

// Re-export the public interface
pub use goals_model::{Goal, GoalProgress};
pub use goals_service::{calculate_goal_progress, GoalService};
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
