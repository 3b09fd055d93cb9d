use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::csv_writer::to_delimited_text;
use super::reports_model::{ReportData, ReportKind, TabularDocument};
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::categories::{Category, CategoryRepositoryTrait};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNKNOWN_PLACEHOLDER};
use crate::dashboard::budget::calculate_budget_usage;
use crate::dashboard::summary::calculate_summary;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::utils::format_utils::format_percent;

fn money(value: Decimal) -> String {
    format!(
        "{:.prec$}",
        value.round_dp(DISPLAY_DECIMAL_PRECISION),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    )
}

/// Builds the tabular record set for one report kind.
///
/// Dangling account and category references render as the "N/A"
/// placeholder; one bad record never fails the report.
pub fn build_report(
    kind: ReportKind,
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &[Category],
    reference: NaiveDate,
) -> ReportData {
    match kind {
        ReportKind::Summary => summary_report(transactions, accounts, reference),
        ReportKind::Transactions => transactions_report(transactions, accounts, categories),
        ReportKind::Budget => budget_report(transactions, categories, reference),
    }
}

fn summary_report(
    transactions: &[Transaction],
    accounts: &[Account],
    reference: NaiveDate,
) -> ReportData {
    let summary = calculate_summary(accounts, transactions, reference);

    let mut report = ReportData::new(vec!["Metric", "Value"]);
    report.push_row(vec![
        "Period".to_string(),
        reference.format("%Y-%m").to_string(),
    ]);
    report.push_row(vec![
        "Total Balance".to_string(),
        money(summary.total_balance),
    ]);
    report.push_row(vec![
        "Monthly Income".to_string(),
        money(summary.monthly_income),
    ]);
    report.push_row(vec![
        "Monthly Expenses".to_string(),
        money(summary.monthly_expenses),
    ]);
    report.push_row(vec![
        "Savings Rate".to_string(),
        format_percent(summary.savings_rate),
    ]);
    report.push_row(vec!["Accounts".to_string(), accounts.len().to_string()]);
    report.push_row(vec![
        "Transactions".to_string(),
        transactions.len().to_string(),
    ]);
    report
}

fn transactions_report(
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &[Category],
) -> ReportData {
    let account_names: HashMap<&str, &str> = accounts
        .iter()
        .map(|account| (account.id.as_str(), account.name.as_str()))
        .collect();
    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|category| (category.id.as_str(), category.name.as_str()))
        .collect();

    let mut report = ReportData::new(vec![
        "Date",
        "Description",
        "Amount",
        "Type",
        "Category",
        "Account",
    ]);
    for transaction in transactions {
        let category = transaction
            .category_id
            .as_deref()
            .and_then(|id| category_names.get(id))
            .copied()
            .unwrap_or(UNKNOWN_PLACEHOLDER);
        let account = account_names
            .get(transaction.account_id.as_str())
            .copied()
            .unwrap_or(UNKNOWN_PLACEHOLDER);

        report.push_row(vec![
            transaction.date.to_string(),
            transaction.description.clone(),
            money(transaction.amount),
            transaction.transaction_type.as_str().to_string(),
            category.to_string(),
            account.to_string(),
        ]);
    }
    report
}

fn budget_report(
    transactions: &[Transaction],
    categories: &[Category],
    reference: NaiveDate,
) -> ReportData {
    let mut report = ReportData::new(vec!["Category", "Budget", "Spent", "Remaining"]);
    for usage in calculate_budget_usage(categories, transactions, reference) {
        report.push_row(vec![
            usage.category_name.clone(),
            money(usage.budget_limit),
            money(usage.spent),
            money(usage.remaining()),
        ]);
    }
    report
}

/// Shapes a report into a page description for a paginated-document
/// renderer.
pub fn to_tabular_document(
    title: &str,
    generated_at: NaiveDateTime,
    report: &ReportData,
) -> TabularDocument {
    TabularDocument {
        title: title.to_string(),
        generated_at,
        columns: report.columns.clone(),
        rows: report.rows.clone(),
    }
}

/// Display title for each report kind, as offered on the export page.
fn report_title(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Summary => "Financial Summary",
        ReportKind::Transactions => "Transaction History",
        ReportKind::Budget => "Budget Analysis",
    }
}

/// Trait defining the contract for report service operations.
pub trait ReportServiceTrait: Send + Sync {
    /// Builds the record set for `kind` over the month of `reference`.
    fn build(&self, kind: ReportKind, reference: NaiveDate) -> Result<ReportData>;

    /// Builds and serializes the report as delimited text.
    fn build_delimited(&self, kind: ReportKind, reference: NaiveDate) -> Result<String>;

    /// Builds and shapes the report for a paginated-document renderer.
    fn build_document(
        &self,
        kind: ReportKind,
        reference: NaiveDate,
        generated_at: NaiveDateTime,
    ) -> Result<TabularDocument>;
}

/// Service assembling exports from the entity snapshots.
pub struct ReportService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    account_repository: Arc<dyn AccountRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        account_repository: Arc<dyn AccountRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        ReportService {
            transaction_repository,
            account_repository,
            category_repository,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn build(&self, kind: ReportKind, reference: NaiveDate) -> Result<ReportData> {
        let transactions = self.transaction_repository.get_transactions()?;
        let accounts = self.account_repository.get_accounts()?;
        let categories = self.category_repository.get_categories()?;
        Ok(build_report(
            kind,
            &transactions,
            &accounts,
            &categories,
            reference,
        ))
    }

    fn build_delimited(&self, kind: ReportKind, reference: NaiveDate) -> Result<String> {
        let report = self.build(kind, reference)?;
        to_delimited_text(&report)
    }

    fn build_document(
        &self,
        kind: ReportKind,
        reference: NaiveDate,
        generated_at: NaiveDateTime,
    ) -> Result<TabularDocument> {
        let report = self.build(kind, reference)?;
        Ok(to_tabular_document(report_title(kind), generated_at, &report))
    }
}
