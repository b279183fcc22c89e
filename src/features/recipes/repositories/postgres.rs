use async_trait::async_trait;
use sqlx::PgPool;

use super::{RecipeReader, RecipeWriter};
use crate::features::recipes::models::{NewRecipe, Recipe, RecipeRow};
use crate::shared::storage::StorageError;

/// PostgreSQL-backed recipe storage
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeReader for PgRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>, StorageError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.category_id, r.name, r.slug, r.preparation_time, r.description,
                   r.photo, r.created_at, r.updated_at,
                   c.name AS category_name, c.slug AS category_slug
            FROM recipes r
            LEFT JOIN categories c ON c.id = r.category_id
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("list recipes", "*", e))?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Recipe, StorageError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.category_id, r.name, r.slug, r.preparation_time, r.description,
                   r.photo, r.created_at, r.updated_at,
                   c.name AS category_name, c.slug AS category_slug
            FROM recipes r
            LEFT JOIN categories c ON c.id = r.category_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("get recipe by id", id, e))?;

        Ok(row.into())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Recipe, StorageError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.category_id, r.name, r.slug, r.preparation_time, r.description,
                   r.photo, r.created_at, r.updated_at,
                   c.name AS category_name, c.slug AS category_slug
            FROM recipes r
            LEFT JOIN categories c ON c.id = r.category_id
            WHERE r.slug = $1
            "#,
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("get recipe by slug", slug, e))?;

        Ok(row.into())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Recipe>, StorageError> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT r.id, r.category_id, r.name, r.slug, r.preparation_time, r.description,
                   r.photo, r.created_at, r.updated_at,
                   c.name AS category_name, c.slug AS category_slug
            FROM recipes r
            LEFT JOIN categories c ON c.id = r.category_id
            WHERE r.category_id = $1
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("list recipes by category", category_id, e))?;

        Ok(rows.into_iter().map(Recipe::from).collect())
    }
}

#[async_trait]
impl RecipeWriter for PgRecipeRepository {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StorageError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            INSERT INTO recipes (category_id, name, slug, preparation_time, description, photo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, category_id, name, slug, preparation_time, description, photo,
                      created_at, updated_at,
                      NULL::TEXT AS category_name, NULL::TEXT AS category_slug
            "#,
        )
        .bind(recipe.category_id)
        .bind(&recipe.name)
        .bind(&recipe.slug)
        .bind(&recipe.preparation_time)
        .bind(&recipe.description)
        .bind(&recipe.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("insert recipe", &recipe.name, e))?;

        Ok(row.into())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, StorageError> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            UPDATE recipes
            SET category_id = $2, name = $3, slug = $4, preparation_time = $5,
                description = $6, photo = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING id, category_id, name, slug, preparation_time, description, photo,
                      created_at, updated_at,
                      NULL::TEXT AS category_name, NULL::TEXT AS category_slug
            "#,
        )
        .bind(recipe.id)
        .bind(recipe.category_id)
        .bind(&recipe.name)
        .bind(&recipe.slug)
        .bind(&recipe.preparation_time)
        .bind(&recipe.description)
        .bind(&recipe.photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_sqlx("update recipe", recipe.id, e))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::from_sqlx("delete recipe", id, e))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
