//! Debts module - domain models, payoff progress, and traits.

mod debts_model;
mod debts_service;
mod debts_traits;

// Re-export the public interface
pub use debts_model::{Debt, DebtPayoff, DebtProgress, DebtType};
pub use debts_service::{calculate_debt_progress, DebtService};
pub use debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
