use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::recipes::handlers;
use crate::features::recipes::services::RecipeService;

/// Create routes for the recipes feature
pub fn routes(service: Arc<RecipeService>) -> Router {
    Router::new()
        .route(
            "/api/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/api/recipes/{id}",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        .route("/api/recipes/slug/{slug}", get(handlers::get_recipe_by_slug))
        .route(
            "/api/categories/{id}/recipes",
            get(handlers::list_recipes_by_category),
        )
        .with_state(service)
}
