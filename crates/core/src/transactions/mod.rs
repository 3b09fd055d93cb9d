//! Transactions module - domain models, filter engine, and service.

mod transactions_filter;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

// Re-export the public interface
pub use transactions_filter::{apply_filters, TransactionFilter};
pub use transactions_model::{Transaction, TransactionType};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
