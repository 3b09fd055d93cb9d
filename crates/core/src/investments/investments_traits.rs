//! Investment repository and service traits.

use super::investments_model::{Investment, InvestmentPerformance};
use crate::errors::Result;

/// Trait defining the contract for investment read operations.
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Returns the owner's investments, newest first.
    fn get_investments(&self) -> Result<Vec<Investment>>;
}

/// Trait defining the contract for investment service operations.
pub trait InvestmentServiceTrait: Send + Sync {
    /// Returns per-investment and aggregate gain/loss performance.
    fn get_investment_performance(&self) -> Result<InvestmentPerformance>;
}
