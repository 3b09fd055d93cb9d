//! Transaction filter engine.
//!
//! A filter is a conjunction of optional constraints. An absent field
//! imposes no constraint, so the empty filter returns the input list
//! unchanged. Output preserves input order; the upstream fetch supplies
//! transactions newest first and nothing here re-sorts them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transactions_model::{Transaction, TransactionType};
use crate::utils::time_utils::in_window;

/// Composable filter specification applied to a transaction list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
    /// Matches `Transaction::category_id`; uncategorized transactions
    /// fail any category constraint.
    pub category_id: Option<String>,
    pub transaction_type: Option<TransactionType>,
    /// Inclusive lower amount bound.
    pub amount_min: Option<Decimal>,
    /// Inclusive upper amount bound.
    pub amount_max: Option<Decimal>,
}

impl TransactionFilter {
    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self == &TransactionFilter::default()
    }

    /// True when `transaction` satisfies every present constraint.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !in_window(transaction.date, self.date_from, self.date_to) {
            return false;
        }
        if let Some(category_id) = &self.category_id {
            if transaction.category_id.as_deref() != Some(category_id.as_str()) {
                return false;
            }
        }
        if let Some(kind) = self.transaction_type {
            if transaction.transaction_type != kind {
                return false;
            }
        }
        if let Some(min) = self.amount_min {
            if transaction.amount < min {
                return false;
            }
        }
        if let Some(max) = self.amount_max {
            if transaction.amount > max {
                return false;
            }
        }
        true
    }
}

/// Applies `filter` to `transactions`, preserving input order.
pub fn apply_filters(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .cloned()
        .collect()
}
