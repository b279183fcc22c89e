use async_trait::async_trait;
use sqlx::PgPool;

use super::{CategoryReader, CategoryWriter};
use crate::features::categories::models::{Category, NewCategory};
use crate::shared::storage::StorageError;

/// PostgreSQL-backed category storage
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryReader for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("list categories", "*", e))
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("get category by id", id, e))
    }

    async fn get_by_name(&self, name: &str) -> Result<Category, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, created_at, updated_at
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("get category by name", name, e))
    }
}

#[async_trait]
impl CategoryWriter for PgCategoryRepository {
    async fn create(&self, category: NewCategory) -> Result<Category, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("insert category", &category.name, e))
    }

    async fn update(&self, category: &Category) -> Result<Category, StorageError> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, slug, created_at, updated_at
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("update category", category.id, e))
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx("delete category", id, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
