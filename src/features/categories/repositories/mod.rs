//! Record store port for categories and its adapters.

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::{
    Category, CategoryChanges, CategoryFilter, CreateCategory,
};

mod pg_category_store;
pub use pg_category_store::PgCategoryStore;

#[cfg(test)]
mod memory_category_store;
#[cfg(test)]
pub use memory_category_store::InMemoryCategoryStore;

/// Persistence operations the category lifecycle relies on.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories matching `filter`, in store order.
    async fn find(&self, filter: &CategoryFilter) -> Result<Vec<Category>>;

    /// First category matching `filter`.
    async fn find_one(&self, filter: &CategoryFilter) -> Result<Option<Category>>;

    /// Insert a new live category.
    async fn create(&self, data: &CreateCategory) -> Result<Category>;

    /// Apply `changes` to every category matching `filter`.
    ///
    /// Returns how many records actually changed; a record that already
    /// holds the requested values is not counted.
    async fn update(&self, filter: &CategoryFilter, changes: &CategoryChanges) -> Result<u64>;
}
