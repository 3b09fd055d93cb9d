//! Category domain models.

use chrono::NaiveDateTime;
use num_traits::Zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a spending category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Display color, e.g. "#ef4444"
    pub color: String,
    pub icon: String,
    /// Monthly spending ceiling. `None` means no budget is tracked for
    /// this category.
    pub budget_limit: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Category {
    /// Returns the budget limit when one is tracked and positive.
    /// Zero-valued limits count as untracked.
    pub fn tracked_budget(&self) -> Option<Decimal> {
        self.budget_limit.filter(|limit| !limit.is_zero() && limit.is_sign_positive())
    }
}
