mod recipe_dto;

pub use recipe_dto::*;
