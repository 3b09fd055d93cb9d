//! Debt repository and service traits.

use super::debts_model::{Debt, DebtProgress};
use crate::errors::Result;

/// Trait defining the contract for debt read operations.
pub trait DebtRepositoryTrait: Send + Sync {
    /// Returns the owner's debts, newest first.
    fn get_debts(&self) -> Result<Vec<Debt>>;
}

/// Trait defining the contract for debt service operations.
pub trait DebtServiceTrait: Send + Sync {
    /// Returns per-debt and aggregate payoff progress.
    fn get_debt_progress(&self) -> Result<DebtProgress>;
}
