//! Transaction repository and service traits.
//!
//! The repository trait defines the read contract the data-access layer
//! implements, without any database-specific types. Lists are pre-scoped
//! to the authenticated owner and ordered newest first.

use super::transactions_filter::TransactionFilter;
use super::transactions_model::Transaction;
use crate::errors::Result;

/// Trait defining the contract for transaction read operations.
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Returns the owner's transactions, newest first.
    fn get_transactions(&self) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for transaction service operations.
pub trait TransactionServiceTrait: Send + Sync {
    /// Returns the full transaction list.
    fn get_transactions(&self) -> Result<Vec<Transaction>>;

    /// Returns the transactions satisfying `filter`, in fetch order.
    fn search_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
}
