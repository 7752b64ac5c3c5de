//! Development server errors
//!
//! Failures are returned to the browser in the backend's own error shape,
//! `{ "error": "..." }`, so the dashboard's message handling applies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Backend could not be reached or its response could not be read
    #[error("Backend unavailable: {0}")]
    Backend(String),

    /// Incoming request could not be translated for the backend
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Backend(_) => StatusCode::BAD_GATEWAY,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(status = status.as_u16(), error = %self, "Request failed");

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
