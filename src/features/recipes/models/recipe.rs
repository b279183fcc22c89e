use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::categories::models::Category;

/// Read-only copy of the owning category carried on a loaded recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySnapshot {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategorySnapshot {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub slug: String,
    pub preparation_time: String,
    pub description: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present only when the category was loaded with the recipe.
    pub category: Option<CategorySnapshot>,
}

/// Recipe row joined with its category columns
#[derive(Debug, FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub slug: String,
    pub preparation_time: String,
    pub description: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        let category = match (row.category_name, row.category_slug) {
            (Some(name), Some(slug)) => Some(CategorySnapshot {
                id: row.category_id,
                name,
                slug,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            category_id: row.category_id,
            name: row.name,
            slug: row.slug,
            preparation_time: row.preparation_time,
            description: row.description,
            photo: row.photo,
            created_at: row.created_at,
            updated_at: row.updated_at,
            category,
        }
    }
}

/// Values for a recipe that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub category_id: i64,
    pub name: String,
    pub slug: String,
    pub preparation_time: String,
    pub description: String,
    pub photo: Option<String>,
}
