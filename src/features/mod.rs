pub mod categories;
pub mod contacts;
pub mod recipes;
