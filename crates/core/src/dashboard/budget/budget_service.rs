use std::sync::Arc;

use chrono::NaiveDate;

use super::budget_model::BudgetUsage;
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::utils::aggregate_utils::{percent_of, sum_where};
use crate::utils::time_utils::same_month;

/// Derives budget consumption per budgeted category for the calendar
/// month of `reference`.
///
/// Categories without a positive budget limit are excluded from the
/// result, not zero-filled. Only `Expense` transactions count as spend.
pub fn calculate_budget_usage(
    categories: &[Category],
    transactions: &[Transaction],
    reference: NaiveDate,
) -> Vec<BudgetUsage> {
    categories
        .iter()
        .filter_map(|category| {
            let limit = category.tracked_budget()?;
            let spent = sum_where(
                transactions,
                |t| {
                    t.is_expense()
                        && t.category_id.as_deref() == Some(category.id.as_str())
                        && same_month(t.date, reference)
                },
                |t| t.amount,
            );
            let over_budget = spent > limit;

            Some(BudgetUsage {
                category_id: category.id.clone(),
                category_name: category.name.clone(),
                budget_limit: limit,
                spent,
                percent_used: percent_of(spent, limit),
                over_budget,
                overage: over_budget.then(|| spent - limit),
            })
        })
        .collect()
}

/// Trait defining the contract for budget service operations.
pub trait BudgetServiceTrait: Send + Sync {
    /// Computes budget usage for the month containing `reference`.
    fn get_budget_usage(&self, reference: NaiveDate) -> Result<Vec<BudgetUsage>>;
}

/// Service combining category and transaction snapshots into budget
/// consumption rows.
pub struct BudgetService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        BudgetService {
            category_repository,
            transaction_repository,
        }
    }
}

impl BudgetServiceTrait for BudgetService {
    fn get_budget_usage(&self, reference: NaiveDate) -> Result<Vec<BudgetUsage>> {
        let categories = self.category_repository.get_categories()?;
        let transactions = self.transaction_repository.get_transactions()?;
        Ok(calculate_budget_usage(&categories, &transactions, reference))
    }
}
