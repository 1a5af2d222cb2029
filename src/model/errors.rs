//! # Model Errors

use thiserror::Error;

use crate::adapter::AdapterError;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while mapping records to models
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// The record has no key yet, so it cannot be addressed
    #[error("{0} has not been saved")]
    Unsaved(&'static str),

    #[error("{0} was not persisted")]
    NotPersisted(&'static str),

    #[error("Invalid base64 contents: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl ModelError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ModelError::Adapter(e) => e.status_code(),
            _ => 500,
        }
    }
}
