use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::summary_model::{CurrencyBalance, DashboardSummary};
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionRepositoryTrait};
use crate::utils::aggregate_utils::{group_by, percent_of, sum_where};
use crate::utils::time_utils::same_month;

/// Derives the summary card metrics from account and transaction
/// snapshots.
///
/// The total balance sums every account balance regardless of currency
/// code, reproducing the dashboard's observed behavior; callers that need
/// per-currency figures use [`calculate_balances_by_currency`]. Monthly
/// income and expenses cover transactions dated in the calendar month of
/// `reference`; transfers count toward neither.
pub fn calculate_summary(
    accounts: &[Account],
    transactions: &[Transaction],
    reference: NaiveDate,
) -> DashboardSummary {
    let total_balance: Decimal = accounts.iter().map(|account| account.balance).sum();

    let monthly_income = sum_where(
        transactions,
        |t| t.is_income() && same_month(t.date, reference),
        |t| t.amount,
    );
    let monthly_expenses = sum_where(
        transactions,
        |t| t.is_expense() && same_month(t.date, reference),
        |t| t.amount,
    );

    DashboardSummary {
        reference,
        total_balance,
        monthly_income,
        monthly_expenses,
        savings_rate: percent_of(monthly_income - monthly_expenses, monthly_income),
    }
}

/// Account balance totals grouped by currency code, in first-seen
/// account order. The explicit alternative to the mixed-currency total.
pub fn calculate_balances_by_currency(accounts: &[Account]) -> Vec<CurrencyBalance> {
    group_by(accounts, |account| account.currency.clone())
        .into_iter()
        .map(|(currency, members)| CurrencyBalance {
            currency,
            balance: members.iter().map(|account| account.balance).sum(),
        })
        .collect()
}

/// Trait defining the contract for summary service operations.
pub trait SummaryServiceTrait: Send + Sync {
    /// Computes the summary cards for the month containing `reference`.
    fn get_summary(&self, reference: NaiveDate) -> Result<DashboardSummary>;

    /// Computes per-currency balance totals.
    fn get_balances_by_currency(&self) -> Result<Vec<CurrencyBalance>>;
}

/// Service combining the account and transaction snapshots into the
/// dashboard summary.
pub struct SummaryService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl SummaryService {
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        SummaryService {
            account_repository,
            transaction_repository,
        }
    }
}

impl SummaryServiceTrait for SummaryService {
    fn get_summary(&self, reference: NaiveDate) -> Result<DashboardSummary> {
        let accounts = self.account_repository.get_accounts()?;
        let transactions = self.transaction_repository.get_transactions()?;
        debug!(
            "Computing summary over {} accounts and {} transactions",
            accounts.len(),
            transactions.len()
        );
        Ok(calculate_summary(&accounts, &transactions, reference))
    }

    fn get_balances_by_currency(&self) -> Result<Vec<CurrencyBalance>> {
        let accounts = self.account_repository.get_accounts()?;
        Ok(calculate_balances_by_currency(&accounts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountType;
    use crate::transactions::TransactionType;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn timestamp() -> NaiveDateTime {
        date(2025, 6, 1).and_hms_opt(0, 0, 0).unwrap()
    }

    fn account(id: &str, balance: Decimal, currency: &str) -> Account {
        Account {
            id: id.to_string(),
            user_id: "user1".to_string(),
            name: format!("account {id}"),
            account_type: AccountType::Checking,
            balance,
            currency: currency.to_string(),
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    fn transaction(
        id: &str,
        amount: Decimal,
        transaction_type: TransactionType,
        on: NaiveDate,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            user_id: "user1".to_string(),
            account_id: "acc1".to_string(),
            category_id: None,
            amount,
            description: format!("transaction {id}"),
            date: on,
            transaction_type,
            is_recurring: false,
            created_at: timestamp(),
            updated_at: timestamp(),
        }
    }

    #[test]
    fn test_summary_scenario() {
        let accounts = vec![
            account("a1", dec!(1000), "USD"),
            account("a2", dec!(500), "USD"),
        ];
        let transactions = vec![
            transaction("t1", dec!(2000), TransactionType::Income, date(2025, 6, 5)),
            transaction("t2", dec!(800), TransactionType::Expense, date(2025, 6, 12)),
        ];

        let summary = calculate_summary(&accounts, &transactions, date(2025, 6, 15));

        assert_eq!(summary.total_balance, dec!(1500));
        assert_eq!(summary.monthly_income, dec!(2000));
        assert_eq!(summary.monthly_expenses, dec!(800));
        assert_eq!(summary.savings_rate, dec!(60));
    }

    #[test]
    fn test_transactions_outside_reference_month_ignored() {
        let transactions = vec![
            transaction("t1", dec!(2000), TransactionType::Income, date(2025, 5, 31)),
            transaction("t2", dec!(300), TransactionType::Expense, date(2025, 7, 1)),
            transaction("t3", dec!(100), TransactionType::Expense, date(2025, 6, 15)),
        ];

        let summary = calculate_summary(&[], &transactions, date(2025, 6, 1));

        assert_eq!(summary.monthly_income, Decimal::ZERO);
        assert_eq!(summary.monthly_expenses, dec!(100));
    }

    #[test]
    fn test_transfers_do_not_count() {
        let transactions = vec![transaction(
            "t1",
            dec!(900),
            TransactionType::Transfer,
            date(2025, 6, 3),
        )];

        let summary = calculate_summary(&[], &transactions, date(2025, 6, 15));

        assert_eq!(summary.monthly_income, Decimal::ZERO);
        assert_eq!(summary.monthly_expenses, Decimal::ZERO);
    }

    #[test]
    fn test_zero_income_yields_zero_savings_rate() {
        let transactions = vec![transaction(
            "t1",
            dec!(250),
            TransactionType::Expense,
            date(2025, 6, 3),
        )];

        let summary = calculate_summary(&[], &transactions, date(2025, 6, 15));

        assert_eq!(summary.savings_rate, Decimal::ZERO);
    }

    #[test]
    fn test_total_balance_mixes_currencies() {
        let accounts = vec![
            account("a1", dec!(1000), "USD"),
            account("a2", dec!(500), "EUR"),
        ];

        let summary = calculate_summary(&accounts, &[], date(2025, 6, 15));

        assert_eq!(summary.total_balance, dec!(1500));
    }

    #[test]
    fn test_balances_by_currency_keeps_codes_apart() {
        let accounts = vec![
            account("a1", dec!(1000), "USD"),
            account("a2", dec!(500), "EUR"),
            account("a3", dec!(250), "USD"),
        ];

        let balances = calculate_balances_by_currency(&accounts);

        assert_eq!(
            balances,
            vec![
                CurrencyBalance {
                    currency: "USD".to_string(),
                    balance: dec!(1250),
                },
                CurrencyBalance {
                    currency: "EUR".to_string(),
                    balance: dec!(500),
                },
            ]
        );
    }

    #[test]
    fn test_service_combines_repositories() {
        struct StaticAccounts(Vec<Account>);
        struct StaticTransactions(Vec<Transaction>);

        impl AccountRepositoryTrait for StaticAccounts {
            fn get_accounts(&self) -> Result<Vec<Account>> {
                Ok(self.0.clone())
            }
        }

        impl TransactionRepositoryTrait for StaticTransactions {
            fn get_transactions(&self) -> Result<Vec<Transaction>> {
                Ok(self.0.clone())
            }
        }

        let service = SummaryService::new(
            Arc::new(StaticAccounts(vec![account("a1", dec!(1000), "USD")])),
            Arc::new(StaticTransactions(vec![transaction(
                "t1",
                dec!(2000),
                TransactionType::Income,
                date(2025, 6, 5),
            )])),
        );

        let summary = service.get_summary(date(2025, 6, 15)).unwrap();
        assert_eq!(summary.total_balance, dec!(1000));
        assert_eq!(summary.monthly_income, dec!(2000));
        assert_eq!(summary.savings_rate, dec!(100));
    }
}
