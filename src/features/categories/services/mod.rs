mod category_service;

pub use category_service::{CategoryLookup, CategoryService};

#[cfg(test)]
pub use category_service::MockCategoryLookup;
