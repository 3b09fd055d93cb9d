use std::sync::Arc;

use log::debug;

use super::transactions_filter::{apply_filters, TransactionFilter};
use super::transactions_model::Transaction;
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service exposing the transaction list and the filter engine.
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService {
            transaction_repository,
        }
    }
}

impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.transaction_repository.get_transactions()
    }

    fn search_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let transactions = self.transaction_repository.get_transactions()?;
        let filtered = apply_filters(&transactions, filter);
        debug!(
            "Filter matched {} of {} transactions",
            filtered.len(),
            transactions.len()
        );
        Ok(filtered)
    }
}
