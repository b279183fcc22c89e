use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;

/// Request body for creating or renaming a category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryRequestDto {
    /// Category name (3-100 characters)
    #[validate(required, length(min = 3, max = 100))]
    #[schema(example = "Desserts")]
    pub name: Option<String>,
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
        }
    }
}
