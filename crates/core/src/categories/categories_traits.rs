//! Category repository trait.

use super::categories_model::Category;
use crate::errors::Result;

/// Trait defining the contract for category read operations.
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Returns the owner's categories, ordered by name.
    fn get_categories(&self) -> Result<Vec<Category>>;
}
