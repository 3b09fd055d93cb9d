use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::spending_model::{CategorySpend, DailyCashflow};
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::constants::UNCATEGORIZED_LABEL;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::utils::aggregate_utils::{group_by, percent_of};
use crate::utils::time_utils::in_window;

/// Groups expense totals by category for the breakdown chart.
///
/// Transactions whose category reference is absent or dangling land in a
/// single "Uncategorized" slice. Slices appear in first-seen transaction
/// order and carry their share of the window's expense total.
pub fn calculate_spending_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<CategorySpend> {
    let names_by_id: HashMap<&str, &str> = categories
        .iter()
        .map(|category| (category.id.as_str(), category.name.as_str()))
        .collect();

    let expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && in_window(t.date, start, end))
        .collect();

    let grand_total: Decimal = expenses.iter().map(|t| t.amount).sum();

    // Dangling references collapse into the uncategorized slice alongside
    // transactions that never had a category.
    let resolved_id = |t: &Transaction| -> Option<String> {
        t.category_id
            .as_deref()
            .filter(|id| names_by_id.contains_key(id))
            .map(str::to_string)
    };

    group_by(&expenses, |t| resolved_id(t))
        .into_iter()
        .map(|(category_id, members)| {
            let total: Decimal = members.iter().map(|t| t.amount).sum();
            let name = category_id
                .as_deref()
                .and_then(|id| names_by_id.get(id))
                .copied()
                .unwrap_or(UNCATEGORIZED_LABEL)
                .to_string();

            CategorySpend {
                category_id,
                name,
                total,
                percent: percent_of(total, grand_total),
            }
        })
        .collect()
}

/// Income and expense totals per day inside the window, ascending by
/// date. Transfers move money between own accounts and are left out.
pub fn calculate_daily_cashflow(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<DailyCashflow> {
    let mut by_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

    for transaction in transactions {
        if !in_window(transaction.date, start, end) {
            continue;
        }
        let entry = by_day
            .entry(transaction.date)
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        if transaction.is_income() {
            entry.0 += transaction.amount;
        } else if transaction.is_expense() {
            entry.1 += transaction.amount;
        }
    }

    by_day
        .into_iter()
        .map(|(date, (income, expenses))| DailyCashflow {
            date,
            income,
            expenses,
        })
        .collect()
}

/// Trait defining the contract for spending analytics operations.
pub trait SpendingServiceTrait: Send + Sync {
    /// Computes the category breakdown for the window.
    fn get_spending_breakdown(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<CategorySpend>>;

    /// Computes the daily cashflow series for the window.
    fn get_daily_cashflow(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<DailyCashflow>>;
}

/// Service preparing the chart data arrays for the analytics page.
pub struct SpendingService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl SpendingService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        SpendingService {
            transaction_repository,
            category_repository,
        }
    }
}

impl SpendingServiceTrait for SpendingService {
    fn get_spending_breakdown(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<CategorySpend>> {
        let transactions = self.transaction_repository.get_transactions()?;
        let categories = self.category_repository.get_categories()?;
        Ok(calculate_spending_breakdown(
            &transactions,
            &categories,
            start,
            end,
        ))
    }

    fn get_daily_cashflow(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<DailyCashflow>> {
        let transactions = self.transaction_repository.get_transactions()?;
        Ok(calculate_daily_cashflow(&transactions, start, end))
    }
}
