//! Categories module - domain models and traits.

mod categories_model;
mod categories_traits;

// Re-export the public interface
pub use categories_model::Category;
pub use categories_traits::CategoryRepositoryTrait;
