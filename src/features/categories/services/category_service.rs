use std::sync::Arc;

use async_trait::async_trait;

use crate::features::categories::errors::CategoryError;
use crate::features::categories::models::{Category, NewCategory};
use crate::features::categories::repositories::{CategoryReader, CategoryWriter};
use crate::shared::slug::derive_slug;
use crate::shared::storage::StorageError;

/// Read access to categories by id, as needed by other features.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Category, CategoryError>;
}

/// Service for category operations
pub struct CategoryService {
    reader: Arc<dyn CategoryReader>,
    writer: Arc<dyn CategoryWriter>,
}

impl CategoryService {
    pub fn new(reader: Arc<dyn CategoryReader>, writer: Arc<dyn CategoryWriter>) -> Self {
        Self { reader, writer }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<Category>, CategoryError> {
        self.reader
            .list()
            .await
            .map_err(|e| CategoryError::storage("list categories", e))
    }

    /// Get category by id
    pub async fn get_by_id(&self, id: i64) -> Result<Category, CategoryError> {
        self.reader.get_by_id(id).await.map_err(|e| match e {
            StorageError::NotFound => CategoryError::NotFound,
            other => CategoryError::storage("load category", other),
        })
    }

    /// Create a category. The name is trimmed and must be unique.
    pub async fn create(&self, name: &str) -> Result<Category, CategoryError> {
        let name = normalize_name(name)?;
        self.ensure_name_available(name, None).await?;

        let new_category = NewCategory {
            name: name.to_string(),
            slug: derive_slug(name),
        };

        let category = self.writer.create(new_category).await.map_err(|e| match e {
            StorageError::Duplicate { constraint } => {
                tracing::warn!(
                    "Category '{}' was created concurrently ({})",
                    name,
                    constraint
                );
                CategoryError::NameAlreadyExists
            }
            other => CategoryError::storage("create category", other),
        })?;

        tracing::info!("Category '{}' created with id {}", category.name, category.id);
        Ok(category)
    }

    /// Rename a category and refresh its slug
    pub async fn update(&self, id: i64, name: &str) -> Result<Category, CategoryError> {
        let name = normalize_name(name)?;
        let mut category = self.get_by_id(id).await?;

        if category.name != name {
            self.ensure_name_available(name, Some(id)).await?;
        }

        category.name = name.to_string();
        category.slug = derive_slug(name);

        let updated = self.writer.update(&category).await.map_err(|e| match e {
            StorageError::NotFound => {
                tracing::warn!("Category {} was deleted before it could be updated", id);
                CategoryError::NotFound
            }
            StorageError::Duplicate { constraint } => {
                tracing::warn!(
                    "Category name '{}' was taken concurrently ({})",
                    name,
                    constraint
                );
                CategoryError::NameAlreadyExists
            }
            other => CategoryError::storage("update category", other),
        })?;

        tracing::info!("Category {} renamed to '{}'", updated.id, updated.name);
        Ok(updated)
    }

    /// Delete a category that no recipe references
    pub async fn delete(&self, id: i64) -> Result<(), CategoryError> {
        self.get_by_id(id).await?;

        self.writer.delete(id).await.map_err(|e| match e {
            StorageError::NotFound => {
                tracing::warn!("Category {} was deleted concurrently", id);
                CategoryError::NotFound
            }
            StorageError::ForeignKey { .. } => CategoryError::InUse,
            other => CategoryError::storage("delete category", other),
        })?;

        tracing::info!("Category {} deleted", id);
        Ok(())
    }

    /// `own_id` excludes the category being renamed from the check.
    async fn ensure_name_available(
        &self,
        name: &str,
        own_id: Option<i64>,
    ) -> Result<(), CategoryError> {
        match self.reader.get_by_name(name).await {
            Ok(existing) if Some(existing.id) == own_id => Ok(()),
            Ok(_) => Err(CategoryError::NameAlreadyExists),
            Err(StorageError::NotFound) => Ok(()),
            Err(e) => Err(CategoryError::storage("check category name", e)),
        }
    }
}

#[async_trait]
impl CategoryLookup for CategoryService {
    async fn get_by_id(&self, id: i64) -> Result<Category, CategoryError> {
        CategoryService::get_by_id(self, id).await
    }
}

/// Trimmed name, rejected when blank or when nothing of it survives in a slug.
fn normalize_name(raw: &str) -> Result<&str, CategoryError> {
    let name = raw.trim();
    if name.is_empty() || derive_slug(name).is_empty() {
        return Err(CategoryError::InvalidName);
    }
    Ok(name)
}
