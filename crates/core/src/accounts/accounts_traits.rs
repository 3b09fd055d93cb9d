//! Account repository trait.
//!
//! Defines the read contract the data-access layer implements. Lists are
//! pre-scoped to the authenticated owner; the engine does no scoping of
//! its own.

use super::accounts_model::Account;
use crate::errors::Result;

/// Trait defining the contract for account read operations.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Returns the owner's accounts, newest first.
    fn get_accounts(&self) -> Result<Vec<Account>>;
}
