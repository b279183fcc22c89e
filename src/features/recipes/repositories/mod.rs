//! Storage capabilities for recipes

mod postgres;

use async_trait::async_trait;

use crate::features::recipes::models::{NewRecipe, Recipe};
use crate::shared::storage::StorageError;

pub use postgres::PgRecipeRepository;

/// Reads return recipes with their category snapshot attached.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeReader: Send + Sync {
    /// All recipes, newest first.
    async fn list(&self) -> Result<Vec<Recipe>, StorageError>;

    async fn get_by_id(&self, id: i64) -> Result<Recipe, StorageError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Recipe, StorageError>;

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Recipe>, StorageError>;
}

/// Writes return the stored row without a category snapshot.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeWriter: Send + Sync {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StorageError>;

    async fn update(&self, recipe: &Recipe) -> Result<Recipe, StorageError>;

    async fn delete(&self, id: i64) -> Result<(), StorageError>;
}
