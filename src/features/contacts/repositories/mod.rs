//! Storage capabilities for contact messages

mod postgres;

use async_trait::async_trait;

use crate::features::contacts::models::{ContactMessage, NewContactMessage};
use crate::shared::storage::StorageError;

pub use postgres::PgContactRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactReader: Send + Sync {
    /// All messages, most recently received first.
    async fn list(&self) -> Result<Vec<ContactMessage>, StorageError>;

    async fn get_by_id(&self, id: i64) -> Result<ContactMessage, StorageError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactWriter: Send + Sync {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, StorageError>;

    /// Set the read flag. `NotFound` when the row does not exist.
    async fn mark_as_read(&self, id: i64) -> Result<ContactMessage, StorageError>;
}
