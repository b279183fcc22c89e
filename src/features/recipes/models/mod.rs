mod recipe;

pub use recipe::{CategorySnapshot, NewRecipe, Recipe, RecipeRow};
