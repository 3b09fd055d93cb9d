//! Investments module - domain models, performance, and traits.

mod investments_model;
mod investments_service;
mod investments_traits;

// Re-export the public interface
pub use investments_model::{Investment, InvestmentGain, InvestmentPerformance, InvestmentType};
pub use investments_service::{calculate_investment_performance, InvestmentService};
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
