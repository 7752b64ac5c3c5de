//! Backend forwarding
//!
//! `ANY /api/*` and `ANY /health*` are replayed against the backend with the
//! same method, path, query and body. Only the headers the API contract uses
//! travel in either direction.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::Response,
};
use std::sync::Arc;

use crate::api::API_KEY_HEADER;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::ServerState;

/// Request headers copied to the backend
const FORWARDED_HEADERS: [&str; 3] = ["content-type", "accept", "x-api-key"];

/// Correlates a forwarded request with its log lines
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn forward(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<Response> {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let url = format!("{}{}", state.backend_url, path_and_query);
    let request_id = uuid::Uuid::new_v4().to_string();

    let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let mut request = state
        .http
        .request(method.clone(), &url)
        .header(REQUEST_ID_HEADER, request_id.as_str());
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value.as_bytes());
        }
    }
    if !body.is_empty() {
        request = request.body(body.to_vec());
    }

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = path_and_query,
        authenticated = headers.contains_key(API_KEY_HEADER),
        "Forwarding to backend"
    );

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(request_id = %request_id, url = %url, "Backend request failed: {}", e);
        ServerError::Backend(e.to_string())
    })?;

    let status = StatusCode::from_u16(upstream.status().as_u16())
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ServerError::Backend(e.to_string()))?;

    tracing::debug!(request_id = %request_id, status = status.as_u16(), "Backend responded");

    let mut builder = Response::builder().status(status);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(bytes))
        .map_err(|e| ServerError::Internal(e.to_string()))
}
