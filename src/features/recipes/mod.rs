//! Recipes feature
//!
//! Every recipe belongs to an existing category. The category reference is
//! checked through the categories feature before any write.
//!
//! ## Endpoints
//!
//! | Method | Path                          | Description                |
//! |--------|-------------------------------|----------------------------|
//! | GET    | /api/recipes                  | List recipes               |
//! | POST   | /api/recipes                  | Create a recipe            |
//! | GET    | /api/recipes/{id}             | Get a recipe               |
//! | PUT    | /api/recipes/{id}             | Update a recipe            |
//! | DELETE | /api/recipes/{id}             | Delete a recipe            |
//! | GET    | /api/recipes/slug/{slug}      | Get a recipe by slug       |
//! | GET    | /api/categories/{id}/recipes  | List recipes of a category |

pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use errors::RecipeError;
