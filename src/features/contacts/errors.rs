use thiserror::Error;

use crate::shared::errors::ErrorClass;
use crate::shared::storage::StorageError;

/// Every way a contact message operation can fail.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("the contact message data is invalid")]
    Invalid,

    #[error("the sender name is required")]
    EmptyName,

    #[error("the sender email is missing or invalid")]
    InvalidEmail,

    #[error("the message is required")]
    EmptyMessage,

    #[error("the subject must not exceed 255 characters")]
    SubjectTooLong,

    #[error("contact message not found")]
    NotFound,

    #[error("contact message storage failure while trying to {operation}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ContactError {
    pub(crate) fn storage(operation: &'static str, source: StorageError) -> Self {
        Self::Storage { operation, source }
    }

    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            Self::Invalid
            | Self::EmptyName
            | Self::InvalidEmail
            | Self::EmptyMessage
            | Self::SubjectTooLong => Some(ErrorClass::InvalidInput),
            Self::NotFound => Some(ErrorClass::NotFound),
            Self::Storage { .. } => None,
        }
    }
}
