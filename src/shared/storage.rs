//! Normalization of database failures into the storage adapter's error kinds.

use std::fmt::Display;

use thiserror::Error;

/// Failure reported by every repository.
///
/// `NotFound`, `Duplicate` and `ForeignKey` are the only kinds services are
/// expected to branch on. Everything else is `Backend` and stays opaque.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint `{constraint}` violated")]
    Duplicate { constraint: String },

    #[error("foreign key constraint `{constraint}` violated")]
    ForeignKey { constraint: String },

    #[error("storage operation `{operation}` failed for {key}")]
    Backend {
        operation: &'static str,
        key: String,
        #[source]
        source: sqlx::Error,
    },
}

impl StorageError {
    /// Classify a driver error raised while running `operation` against `key`.
    pub fn from_sqlx(operation: &'static str, key: impl Display, error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => Self::Duplicate {
                constraint: constraint_name(db_err.constraint()),
            },
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                Self::ForeignKey {
                    constraint: constraint_name(db_err.constraint()),
                }
            }
            other => Self::Backend {
                operation,
                key: key.to_string(),
                source: other,
            },
        }
    }
}

fn constraint_name(constraint: Option<&str>) -> String {
    constraint.unwrap_or("unknown").to_string()
}
