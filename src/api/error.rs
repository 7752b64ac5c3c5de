//! Client Error Types
//!
//! Every API call either yields a fully decoded value or fails with one
//! `ClientError`. There are no partial results.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::api::ApiClient) calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-success status.
    ///
    /// `message` is the backend's `error` text, falling back to the
    /// HTTP status text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response whose body did not match the declared type
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Build an `Api` error from a failed response's status and raw body
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, body),
        }
    }

    /// HTTP status code, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the backend rejected the credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Check if the backend could not be reached at all
    pub fn is_connect(&self) -> bool {
        matches!(self, ClientError::Network(e) if e.is_connect())
    }
}

/// Pick the human-readable message for a failed response.
///
/// A JSON body yields its `error` field when that is a non-empty string or
/// a non-zero scalar; any other JSON body gives `HTTP <code>`. A body that
/// is not JSON gives the status text, or `HTTP <code>` when there is none.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    let message = match serde_json::from_slice::<Value>(body) {
        Ok(parsed) => parsed.get("error").map(error_text).unwrap_or_default(),
        Err(_) => status.canonical_reason().unwrap_or_default().to_string(),
    };

    if message.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        message
    }
}

/// Text of an `error` field; empty when it carries no message
fn error_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(n) if n.as_f64() != Some(0.0) => n.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => String::new(),
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
