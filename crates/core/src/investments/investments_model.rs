//! Investment domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of investment as presented in the portfolio view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentType {
    Stocks,
    Crypto,
    RealEstate,
    MutualFund,
    Bonds,
    Other,
}

/// Domain model representing a tracked investment position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub investment_type: InvestmentType,
    pub invested_amount: Decimal,
    pub current_value: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Gain/loss state derived for a single investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentGain {
    pub investment_id: String,
    pub name: String,
    pub investment_type: InvestmentType,
    pub current_value: Decimal,
    /// `current_value - invested_amount`; negative for a loss.
    pub gain: Decimal,
    pub gain_percent: Decimal,
}

/// Aggregate performance across all investments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPerformance {
    pub investments: Vec<InvestmentGain>,
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_gain: Decimal,
    pub total_gain_percent: Decimal,
}
