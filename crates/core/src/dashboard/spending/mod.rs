mod spending_model;
mod spending_service;

pub use spending_model::{CategorySpend, DailyCashflow};
pub use spending_service::{
    calculate_daily_cashflow, calculate_spending_breakdown, SpendingService, SpendingServiceTrait,
};
