mod budget_model;
mod budget_service;

pub use budget_model::BudgetUsage;
pub use budget_service::{calculate_budget_usage, BudgetService, BudgetServiceTrait};
