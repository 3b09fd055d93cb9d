//! Debt domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of debt as presented in the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebtType {
    CreditCard,
    Mortgage,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
    Other,
}

/// Domain model representing a tracked debt.
///
/// `current_balance` usually stays at or below `original_amount`, but the
/// store enforces no such constraint (fees and interest can push it
/// above), so nothing here may assume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub debt_type: DebtType,
    pub original_amount: Decimal,
    pub current_balance: Decimal,
    /// Annual interest rate in percent, e.g. 19.99
    pub interest_rate: Decimal,
    pub monthly_payment: Decimal,
    pub next_payment_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payoff state derived for a single debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub debt_id: String,
    pub name: String,
    pub debt_type: DebtType,
    pub current_balance: Decimal,
    /// Share of the original principal repaid. Negative when the balance
    /// has grown past the original amount.
    pub payoff_percent: Decimal,
}

/// Aggregate payoff progress across all debts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtProgress {
    pub debts: Vec<DebtPayoff>,
    pub total_current_balance: Decimal,
    pub total_original_amount: Decimal,
    pub total_paid: Decimal,
    pub overall_percent: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_type_uses_kebab_case_labels() {
        assert_eq!(
            serde_json::to_string(&DebtType::CreditCard).unwrap(),
            "\"credit-card\""
        );
        assert_eq!(
            serde_json::from_str::<DebtType>("\"student-loan\"").unwrap(),
            DebtType::StudentLoan
        );
    }
}
