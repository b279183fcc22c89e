use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::recipes::models::{CategorySnapshot, Recipe};
use crate::features::recipes::services::RecipeInput;

/// Request body for creating or updating a recipe
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequestDto {
    /// Recipe name (3-150 characters)
    #[validate(required, length(min = 3, max = 150))]
    #[schema(example = "Chocolate Cake")]
    pub name: Option<String>,

    /// Id of an existing category
    #[validate(required, range(exclusive_min = 0))]
    #[schema(example = 1)]
    pub category_id: Option<i64>,

    /// Free-form preparation time (max 50 characters)
    #[validate(required, length(max = 50))]
    #[schema(example = "45 minutes")]
    pub preparation_time: Option<String>,

    #[validate(required)]
    pub description: Option<String>,

    /// Photo URL
    #[validate(length(max = 255))]
    pub photo: Option<String>,
}

impl From<RecipeRequestDto> for RecipeInput {
    fn from(dto: RecipeRequestDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            category_id: dto.category_id.unwrap_or_default(),
            preparation_time: dto.preparation_time.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            photo: dto.photo.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Response DTO for recipe
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponseDto {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub slug: String,
    pub preparation_time: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponseDto>,
}

impl From<CategorySnapshot> for CategoryResponseDto {
    fn from(c: CategorySnapshot) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
        }
    }
}

impl From<Recipe> for RecipeResponseDto {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            category_id: r.category_id,
            name: r.name,
            slug: r.slug,
            preparation_time: r.preparation_time,
            description: r.description,
            photo: r.photo,
            created_at: r.created_at,
            updated_at: r.updated_at,
            category: r.category.map(Into::into),
        }
    }
}
