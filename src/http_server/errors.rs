//! HTTP service errors
//!
//! Every error renders as a plain-text body with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::model::ModelError;
use crate::observability::{events, Logger};

/// Result type for route handlers
pub type ServiceResult<T> = Result<T, ServiceError>;

/// File service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("File at path \"{0}\" not found")]
    NotFound(String),

    #[error("No file provided in field \"datafile\"")]
    MissingUpload,

    #[error("Invalid upload: {0}")]
    Multipart(String),

    #[error("Storage error: {0}")]
    Model(#[from] ModelError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::MissingUpload => StatusCode::BAD_REQUEST,
            ServiceError::Multipart(_) => StatusCode::BAD_REQUEST,
            ServiceError::Model(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ServiceError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        if status.is_server_error() {
            Logger::error(events::STORAGE_ERROR, &[("error", message.as_str())]);
        }
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::AdapterError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::NotFound("a.txt".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ServiceError::MissingUpload.status_code(), StatusCode::BAD_REQUEST);

        let unimplemented = ServiceError::from(ModelError::from(AdapterError::not_implemented(
            "base", "create",
        )));
        assert_eq!(unimplemented.status_code(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            ServiceError::from(ModelError::MissingField("path")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(
            ServiceError::NotFound("missing.txt".into()).to_string(),
            "File at path \"missing.txt\" not found"
        );
    }
}
