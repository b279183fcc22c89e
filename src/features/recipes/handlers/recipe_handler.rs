use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::recipes::dtos::{RecipeRequestDto, RecipeResponseDto};
use crate::features::recipes::services::RecipeService;
use crate::shared::types::ErrorResponse;

/// List all recipes, newest first
#[utoipa::path(
    get,
    path = "/api/recipes",
    responses(
        (status = 200, description = "Recipes", body = Vec<RecipeResponseDto>),
    ),
    tag = "recipes"
)]
pub async fn list_recipes(
    State(service): State<Arc<RecipeService>>,
) -> Result<Json<Vec<RecipeResponseDto>>> {
    let recipes = service.list().await?;
    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// Get recipe by id
#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe found", body = RecipeResponseDto),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn get_recipe(
    State(service): State<Arc<RecipeService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<RecipeResponseDto>> {
    let recipe = service.get_by_id(id).await?;
    Ok(Json(recipe.into()))
}

/// Get recipe by slug
#[utoipa::path(
    get,
    path = "/api/recipes/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Recipe slug")
    ),
    responses(
        (status = 200, description = "Recipe found", body = RecipeResponseDto),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn get_recipe_by_slug(
    State(service): State<Arc<RecipeService>>,
    AppPath(slug): AppPath<String>,
) -> Result<Json<RecipeResponseDto>> {
    let recipe = service.get_by_slug(&slug).await?;
    Ok(Json(recipe.into()))
}

/// List the recipes of a category
#[utoipa::path(
    get,
    path = "/api/categories/{id}/recipes",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Recipes of the category", body = Vec<RecipeResponseDto>),
        (status = 400, description = "Category does not exist", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn list_recipes_by_category(
    State(service): State<Arc<RecipeService>>,
    AppPath(category_id): AppPath<i64>,
) -> Result<Json<Vec<RecipeResponseDto>>> {
    let recipes = service.list_by_category(category_id).await?;
    Ok(Json(recipes.into_iter().map(Into::into).collect()))
}

/// Create a recipe
#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body = RecipeRequestDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeResponseDto),
        (status = 400, description = "Invalid input or unknown category", body = ErrorResponse),
        (status = 409, description = "Name already exists", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn create_recipe(
    State(service): State<Arc<RecipeService>>,
    AppJson(dto): AppJson<RecipeRequestDto>,
) -> Result<(StatusCode, Json<RecipeResponseDto>)> {
    dto.validate()?;

    let recipe = service.create(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(recipe.into())))
}

/// Update a recipe
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    request_body = RecipeRequestDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeResponseDto),
        (status = 400, description = "Invalid input or unknown category", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 409, description = "Name already exists", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn update_recipe(
    State(service): State<Arc<RecipeService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<RecipeRequestDto>,
) -> Result<Json<RecipeResponseDto>> {
    dto.validate()?;

    let recipe = service.update(id, dto.into()).await?;
    Ok(Json(recipe.into()))
}

/// Delete a recipe
#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn delete_recipe(
    State(service): State<Arc<RecipeService>>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
