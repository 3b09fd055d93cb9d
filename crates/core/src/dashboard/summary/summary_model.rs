//! Summary card domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline metrics for the dashboard summary cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Month the monthly figures were measured in (any date inside it).
    pub reference: NaiveDate,
    /// Sum of all account balances. Balances are summed across currency
    /// codes without conversion; see `CurrencyBalance` for the
    /// currency-aware breakdown.
    pub total_balance: Decimal,
    pub monthly_income: Decimal,
    pub monthly_expenses: Decimal,
    /// Share of monthly income not spent. Zero when there is no income.
    pub savings_rate: Decimal,
}

/// Account balance total for a single currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyBalance {
    pub currency: String,
    pub balance: Decimal,
}
