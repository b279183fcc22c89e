use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};

use crate::core::error::AppError;
use crate::features::categories::{routes as categories_routes, services::CategoryService};
use crate::features::contacts::{routes as contacts_routes, services::ContactService};
use crate::features::recipes::{routes as recipes_routes, services::RecipeService};

/// The services behind the HTTP API
#[derive(Clone)]
pub struct Services {
    pub categories: Arc<CategoryService>,
    pub recipes: Arc<RecipeService>,
    pub contacts: Arc<ContactService>,
}

/// API routes without the outer layers (tracing, request ids, CORS, docs)
pub fn router(services: Services) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(recipes_routes::routes(services.recipes))
        .merge(contacts_routes::routes(services.contacts))
        .route("/health", get(health_check))
        .fallback(route_not_found)
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
