//! Storage capabilities for categories
//!
//! Reads and writes are separate capabilities so a service can be handed
//! only what it needs.

mod postgres;

use async_trait::async_trait;

use crate::features::categories::models::{Category, NewCategory};
use crate::shared::storage::StorageError;

pub use postgres::PgCategoryRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryReader: Send + Sync {
    /// All categories ordered by name.
    async fn list(&self) -> Result<Vec<Category>, StorageError>;

    async fn get_by_id(&self, id: i64) -> Result<Category, StorageError>;

    /// Exact match on the stored (trimmed) name.
    async fn get_by_name(&self, name: &str) -> Result<Category, StorageError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryWriter: Send + Sync {
    /// Insert and return the stored row with its assigned id.
    async fn create(&self, category: NewCategory) -> Result<Category, StorageError>;

    /// Persist name and slug. `NotFound` when the row no longer exists.
    async fn update(&self, category: &Category) -> Result<Category, StorageError>;

    /// `NotFound` when no row was deleted.
    async fn delete(&self, id: i64) -> Result<(), StorageError>;
}
