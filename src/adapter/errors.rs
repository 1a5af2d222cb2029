//! # Adapter Errors

use thiserror::Error;

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Storage adapter errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdapterError {
    /// The backend does not provide this operation
    #[error("{adapter} does not implement {operation}")]
    NotImplemented {
        adapter: String,
        operation: &'static str,
    },

    #[error("Record in {storage_name} has no usable key")]
    MissingKey { storage_name: String },

    #[error("Unknown storage backend: {0}")]
    UnknownStorage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdapterError {
    pub fn not_implemented(adapter: &str, operation: &'static str) -> Self {
        AdapterError::NotImplemented {
            adapter: adapter.to_string(),
            operation,
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            AdapterError::NotImplemented { .. } => 501,
            AdapterError::MissingKey { .. } => 500,
            AdapterError::UnknownStorage(_) => 500,
            AdapterError::Internal(_) => 500,
        }
    }
}
