/// Server error types
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_store::{FieldError, StoreError};
use thiserror::Error;

use crate::envelope::ApiResponse;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors a request can end in. Each converts into the response envelope at
/// the handler boundary; none crosses into a success response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required input field missing or malformed
    #[error("{}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// Request body could not be read or decoded
    #[error("{0}")]
    BadRequest(String),

    /// Path id is not a 24-hex-character identifier
    #[error("invalid user id: {0}")]
    InvalidId(String),

    /// Target record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Failure from the underlying store, timeouts included
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration error at startup
    #[error("configuration error: {0}")]
    Config(String),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::BadRequest(_) | ApiError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(err) => {
                tracing::error!("store failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Config(msg) => {
                tracing::error!("config error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The store message passes through verbatim; clients of this service
        // see the same failure text the driver reported.
        ApiResponse::error(status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_every_failed_field() {
        let err = ApiError::Validation(vec![FieldError {
            field: "name",
            message: "required",
        }]);
        assert_eq!(err.to_string(), "name: required");
    }

    #[test]
    fn invalid_id_mentions_the_offending_value() {
        let err = ApiError::InvalidId("not-hex".to_string());
        assert_eq!(err.to_string(), "invalid user id: not-hex");
    }
}
