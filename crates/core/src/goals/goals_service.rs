use std::sync::Arc;

use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::goals_model::{Goal, GoalProgress};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::utils::aggregate_utils::percent_of;
use crate::utils::time_utils::days_until;

/// Derives funding progress for each goal against a reference date.
///
/// Percent funded is capped at 100. The monthly saving pace assumes a
/// thirty-day month, matching the dashboard's pacing hint.
pub fn calculate_goal_progress(goals: &[Goal], reference: NaiveDate) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| {
            let percent_funded = percent_of(goal.current_amount, goal.target_amount).min(dec!(100));
            let days_remaining = days_until(reference, goal.target_date);
            let outstanding = goal.target_amount - goal.current_amount;
            let monthly_saving_needed = if days_remaining > 0 && outstanding.is_sign_positive() {
                (outstanding * dec!(30) / Decimal::from(days_remaining))
                    .round_dp(DISPLAY_DECIMAL_PRECISION)
            } else {
                Decimal::zero()
            };

            GoalProgress {
                goal_id: goal.id.clone(),
                name: goal.name.clone(),
                target_amount: goal.target_amount,
                current_amount: goal.current_amount,
                percent_funded,
                days_remaining,
                monthly_saving_needed,
            }
        })
        .collect()
}

/// Service exposing savings goal progress.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repository }
    }
}

impl GoalServiceTrait for GoalService {
    fn get_goal_progress(&self, reference: NaiveDate) -> Result<Vec<GoalProgress>> {
        let goals = self.goal_repository.get_goals()?;
        Ok(calculate_goal_progress(&goals, reference))
    }
}
