//! Budget usage domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly budget consumption for a single budgeted category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub category_id: String,
    pub category_name: String,
    pub budget_limit: Decimal,
    /// Expense total for the category in the reference month.
    pub spent: Decimal,
    /// Share of the limit consumed; exceeds 100 when over budget.
    pub percent_used: Decimal,
    pub over_budget: bool,
    /// Amount past the limit, present only when `over_budget` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overage: Option<Decimal>,
}

impl BudgetUsage {
    /// Budget left this month; negative once the limit is blown.
    pub fn remaining(&self) -> Decimal {
        self.budget_limit - self.spent
    }
}
