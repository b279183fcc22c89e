use std::sync::Arc;

use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryLookup;
use crate::features::categories::CategoryError;
use crate::features::recipes::errors::RecipeError;
use crate::features::recipes::models::{CategorySnapshot, NewRecipe, Recipe};
use crate::features::recipes::repositories::{RecipeReader, RecipeWriter};
use crate::shared::slug::derive_slug;
use crate::shared::storage::StorageError;

/// Fields supplied by the caller when creating or updating a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeInput {
    pub name: String,
    pub category_id: i64,
    pub preparation_time: String,
    pub description: String,
    pub photo: Option<String>,
}

/// Service for recipe operations
pub struct RecipeService {
    reader: Arc<dyn RecipeReader>,
    writer: Arc<dyn RecipeWriter>,
    categories: Arc<dyn CategoryLookup>,
}

impl RecipeService {
    pub fn new(
        reader: Arc<dyn RecipeReader>,
        writer: Arc<dyn RecipeWriter>,
        categories: Arc<dyn CategoryLookup>,
    ) -> Self {
        Self {
            reader,
            writer,
            categories,
        }
    }

    /// List all recipes, newest first
    pub async fn list(&self) -> Result<Vec<Recipe>, RecipeError> {
        self.reader
            .list()
            .await
            .map_err(|e| RecipeError::storage("list recipes", e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Recipe, RecipeError> {
        self.reader
            .get_by_id(id)
            .await
            .map_err(|e| translate_read("load recipe", e))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Recipe, RecipeError> {
        self.reader
            .get_by_slug(slug)
            .await
            .map_err(|e| translate_read("load recipe by slug", e))
    }

    /// List the recipes of an existing category
    pub async fn list_by_category(&self, category_id: i64) -> Result<Vec<Recipe>, RecipeError> {
        self.ensure_category(category_id).await?;

        self.reader
            .list_by_category(category_id)
            .await
            .map_err(|e| RecipeError::storage("list recipes by category", e))
    }

    /// Create a recipe in an existing category
    pub async fn create(&self, input: RecipeInput) -> Result<Recipe, RecipeError> {
        let name = validated_name(&input.name)?;
        let category = self.ensure_category(input.category_id).await?;

        let new_recipe = NewRecipe {
            category_id: input.category_id,
            name: name.to_string(),
            slug: derive_slug(name),
            preparation_time: input.preparation_time,
            description: input.description,
            photo: input.photo,
        };

        let mut recipe = self
            .writer
            .create(new_recipe)
            .await
            .map_err(|e| translate_write("create recipe", category.id, e))?;
        recipe.category = Some(CategorySnapshot::from(&category));

        tracing::info!(
            "Recipe '{}' created with id {} in category {}",
            recipe.name,
            recipe.id,
            category.id
        );
        Ok(recipe)
    }

    /// Replace the fields of an existing recipe
    pub async fn update(&self, id: i64, input: RecipeInput) -> Result<Recipe, RecipeError> {
        let name = validated_name(&input.name)?;
        let category = self.ensure_category(input.category_id).await?;
        let mut recipe = self.get_by_id(id).await?;

        recipe.category_id = category.id;
        recipe.name = name.to_string();
        recipe.slug = derive_slug(name);
        recipe.preparation_time = input.preparation_time;
        recipe.description = input.description;
        recipe.photo = input.photo;

        let mut updated = self
            .writer
            .update(&recipe)
            .await
            .map_err(|e| match e {
                StorageError::NotFound => {
                    tracing::warn!("Recipe {} was deleted before it could be updated", id);
                    RecipeError::NotFound
                }
                other => translate_write("update recipe", category.id, other),
            })?;
        updated.category = Some(CategorySnapshot::from(&category));

        tracing::info!("Recipe {} updated", updated.id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), RecipeError> {
        self.get_by_id(id).await?;

        self.writer.delete(id).await.map_err(|e| match e {
            StorageError::NotFound => {
                tracing::warn!("Recipe {} was deleted concurrently", id);
                RecipeError::NotFound
            }
            other => RecipeError::storage("delete recipe", other),
        })?;

        tracing::info!("Recipe {} deleted", id);
        Ok(())
    }

    /// Resolve the referenced category, treating a miss as invalid input.
    async fn ensure_category(&self, category_id: i64) -> Result<Category, RecipeError> {
        if category_id <= 0 {
            return Err(RecipeError::MissingOrInvalidCategory {
                category_id,
                source: None,
            });
        }

        self.categories
            .get_by_id(category_id)
            .await
            .map_err(|e| match e {
                miss @ CategoryError::NotFound => RecipeError::MissingOrInvalidCategory {
                    category_id,
                    source: Some(miss),
                },
                other => RecipeError::CategoryLookup {
                    category_id,
                    source: other,
                },
            })
    }
}

fn validated_name(raw: &str) -> Result<&str, RecipeError> {
    let name = raw.trim();
    if name.is_empty() || derive_slug(name).is_empty() {
        return Err(RecipeError::InvalidName);
    }
    Ok(name)
}

fn translate_read(operation: &'static str, error: StorageError) -> RecipeError {
    match error {
        StorageError::NotFound => RecipeError::NotFound,
        other => RecipeError::storage(operation, other),
    }
}

fn translate_write(operation: &'static str, category_id: i64, error: StorageError) -> RecipeError {
    match error {
        StorageError::Duplicate { .. } => RecipeError::NameAlreadyExists,
        StorageError::ForeignKey { constraint } => {
            tracing::warn!(
                "Category {} disappeared before recipe write ({})",
                category_id,
                constraint
            );
            RecipeError::MissingOrInvalidCategory {
                category_id,
                source: None,
            }
        }
        other => RecipeError::storage(operation, other),
    }
}
