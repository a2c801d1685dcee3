//! Uniform response envelope
//!
//! Every response, success or failure, is wrapped in the same typed shape:
//!
//! ```json
//! { "status": 200, "message": "success", "data": { "data": <payload> } }
//! ```
//!
//! Failures carry the error string as the payload and `"message": "error"`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Typed envelope around every response payload.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: &'static str,
    pub data: Payload<T>,
}

/// Inner wrapper keeping the `data.data` wire shape.
#[derive(Debug, Serialize)]
pub struct Payload<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Success envelope with the given HTTP status.
    pub fn success(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: "success",
            data: Payload { data },
        }
    }

    /// Error envelope with the given HTTP status.
    pub fn error(status: StatusCode, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: "error",
            data: Payload { data },
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
