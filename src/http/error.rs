//! HTTP error handling and response types.
//!
//! Every failing endpoint answers with a JSON body of the shape
//! `{"message": ...}`, matching the success-message envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::MessageResponse;
use crate::db::repository::RepositoryError;

/// Message returned whenever a requested auto does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Auto no encontrado";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Requested auto does not exist
    NotFound,
    /// Invalid request body (validation error)
    BadRequest(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
                }
                RepositoryError::ValidationError { ref message, .. } => {
                    (StatusCode::BAD_REQUEST, message.clone())
                }
                other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
            },
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        let err = AppError::from(RepositoryError::validation("marca must be a non-empty string"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_repository_errors_map_to_500() {
        let err = AppError::from(RepositoryError::connection("pool exhausted"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
