//! Spending analytics domain models.
//!
//! These are the data arrays handed to the charting layer; the engine
//! prepares them and renders nothing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense total for one category slice of the breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpend {
    /// Absent for the "Uncategorized" slice.
    pub category_id: Option<String>,
    pub name: String,
    pub total: Decimal,
    /// Share of the window's expense total.
    pub percent: Decimal,
}

/// Income/expense totals for one day of the cashflow chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCashflow {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
}
