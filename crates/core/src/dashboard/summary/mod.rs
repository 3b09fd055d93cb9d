mod summary_model;
mod summary_service;

pub use summary_model::{CurrencyBalance, DashboardSummary};
pub use summary_service::{
    calculate_balances_by_currency, calculate_summary, SummaryService, SummaryServiceTrait,
};
