use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::recipes::{dtos as recipes_dtos, handlers as recipes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Recipes
        recipes_handlers::list_recipes,
        recipes_handlers::get_recipe,
        recipes_handlers::get_recipe_by_slug,
        recipes_handlers::list_recipes_by_category,
        recipes_handlers::create_recipe,
        recipes_handlers::update_recipe,
        recipes_handlers::delete_recipe,
        // Contacts
        contacts_handlers::submit_contact,
        contacts_handlers::list_contacts,
        contacts_handlers::get_contact,
        contacts_handlers::mark_contact_read,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoryRequestDto,
            categories_dtos::CategoryResponseDto,
            // Recipes
            recipes_dtos::RecipeRequestDto,
            recipes_dtos::RecipeResponseDto,
            // Contacts
            contacts_dtos::ContactRequestDto,
            contacts_dtos::ContactSubmittedDto,
            contacts_dtos::ContactMessageResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Recipe categories"),
        (name = "recipes", description = "Recipes and their category"),
        (name = "contacts", description = "Contact form submissions and admin inbox"),
    ),
    info(
        title = "Recipe Box API",
        version = "0.1.0",
        description = "API documentation for recipe categories, recipes and contact messages",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
