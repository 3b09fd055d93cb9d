//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction. The amount field always carries the
/// magnitude; this enum carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    /// Lowercase label as shown in lists and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Transfer => "transfer",
        }
    }
}

/// Domain model representing a posted transaction.
///
/// Every transaction references exactly one account; the category
/// reference is optional and may dangle if the category was deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub category_id: Option<String>,
    /// Non-negative magnitude; direction is `transaction_type`.
    pub amount: Decimal,
    pub description: String,
    /// Calendar date of the transaction, no time component.
    pub date: NaiveDate,
    pub transaction_type: TransactionType,
    pub is_recurring: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let transaction = Transaction {
            id: "t1".to_string(),
            user_id: "user1".to_string(),
            account_id: "acc1".to_string(),
            category_id: None,
            amount: dec!(45.9),
            description: "Dinner".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            transaction_type: TransactionType::Expense,
            is_recurring: false,
            created_at: NaiveDate::from_ymd_opt(2025, 6, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2025, 6, 5)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };

        let value = serde_json::to_value(&transaction).unwrap();
        assert_eq!(value["accountId"], "acc1");
        assert_eq!(value["transactionType"], "expense");
        assert_eq!(value["isRecurring"], false);
        assert!(value["categoryId"].is_null());
    }

    #[test]
    fn test_type_labels_round_trip() {
        for kind in [
            TransactionType::Income,
            TransactionType::Expense,
            TransactionType::Transfer,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: TransactionType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
