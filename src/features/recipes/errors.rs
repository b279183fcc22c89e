use thiserror::Error;

use crate::features::categories::CategoryError;
use crate::shared::errors::ErrorClass;
use crate::shared::storage::StorageError;

/// Every way a recipe operation can fail.
#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("recipe not found")]
    NotFound,

    #[error("recipe name is invalid or empty")]
    InvalidName,

    /// The category id is zero, negative, or names no stored category.
    /// When the lookup itself reported the miss, it is kept as the source.
    #[error("recipe must belong to a valid category: category {category_id} does not exist")]
    MissingOrInvalidCategory {
        category_id: i64,
        #[source]
        source: Option<CategoryError>,
    },

    #[allow(dead_code)]
    #[error("the ingredients provided for the recipe are not valid")]
    InvalidIngredients,

    #[error("a recipe with that name already exists")]
    NameAlreadyExists,

    #[error("could not verify category {category_id}")]
    CategoryLookup {
        category_id: i64,
        #[source]
        source: CategoryError,
    },

    #[error("recipe storage failure while trying to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageError,
    },
}

impl RecipeError {
    pub(crate) fn storage(operation: &'static str, source: StorageError) -> Self {
        Self::Storage { operation, source }
    }

    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            Self::NotFound => Some(ErrorClass::NotFound),
            Self::InvalidName | Self::MissingOrInvalidCategory { .. } | Self::InvalidIngredients => {
                Some(ErrorClass::InvalidInput)
            }
            Self::NameAlreadyExists => Some(ErrorClass::Conflict),
            Self::CategoryLookup { .. } | Self::Storage { .. } => None,
        }
    }
}
