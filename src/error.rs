//! Error types for the migration run
//!
//! `StoreError` covers anything that went wrong talking to the parameter store.
//! `MigrateError` is what the driver returns; none of these are recovered from.

use thiserror::Error;

/// Failure reported by a parameter store call (network, auth, throttling, rejection).
#[derive(Debug, Error)]
#[error("{operation} failed: {message}")]
pub struct StoreError {
    /// Store operation that failed, e.g. `GetParametersByPath`
    pub operation: &'static str,
    pub message: String,
}

impl StoreError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Parameter '{name}' has no decrypted value; refusing to rewrite it")]
    MissingValue { name: String },

    #[error("Failed to write progress output")]
    Output(#[from] std::io::Error),
}

impl MigrateError {
    pub fn is_store(&self) -> bool {
        matches!(self, MigrateError::Store(_))
    }

    pub fn is_missing_value(&self) -> bool {
        matches!(self, MigrateError::MissingValue { .. })
    }
}
