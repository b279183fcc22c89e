mod recipe_service;

pub use recipe_service::{RecipeInput, RecipeService};
