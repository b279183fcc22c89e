use thiserror::Error;

use crate::shared::errors::ErrorClass;
use crate::shared::storage::StorageError;

/// Every way a category operation can fail.
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("category not found")]
    NotFound,

    #[error("category name is invalid or empty")]
    InvalidName,

    #[error("a category with that name already exists")]
    NameAlreadyExists,

    #[error("category is still used by one or more recipes")]
    InUse,

    #[error("category storage failure while trying to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageError,
    },
}

impl CategoryError {
    pub(crate) fn storage(operation: &'static str, source: StorageError) -> Self {
        Self::Storage { operation, source }
    }

    /// `None` for opaque failures.
    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            Self::NotFound => Some(ErrorClass::NotFound),
            Self::InvalidName => Some(ErrorClass::InvalidInput),
            Self::NameAlreadyExists | Self::InUse => Some(ErrorClass::Conflict),
            Self::Storage { .. } => None,
        }
    }
}
