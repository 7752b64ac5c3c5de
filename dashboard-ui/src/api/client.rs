//! HTTP API Client
//!
//! Authenticated requests against the TimeForged REST API. Paths are
//! relative: the dashboard is served from the same origin as `/api`, either
//! by `trunk serve` or `tfdash-serve` forwarding to the daemon.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::storage::KeyStore;
use super::types::{
    ApiError, HealthResponse, HourlyActivity, Session, StatusResponse, Summary, UserInfo,
};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the TimeForged API
///
/// Reads the key from the [`KeyStore`] on every call, so saving or clearing
/// a key in settings applies to the next request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiClient {
    base: &'static str,
    store: KeyStore,
}

impl ApiClient {
    pub fn new(base: &'static str, store: KeyStore) -> Self {
        Self { base, store }
    }

    pub fn store(&self) -> KeyStore {
        self.store
    }

    pub async fn status(&self) -> Result<StatusResponse, String> {
        self.get("/api/v1/status").await
    }

    pub async fn summary(&self, from: Option<&str>, to: Option<&str>) -> Result<Summary, String> {
        self.get(&format!("/api/v1/reports/summary{}", query_string(from, to)))
            .await
    }

    pub async fn sessions(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<Session>, String> {
        self.get(&format!("/api/v1/reports/sessions{}", query_string(from, to)))
            .await
    }

    pub async fn activity(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<HourlyActivity>, String> {
        self.get(&format!("/api/v1/reports/activity{}", query_string(from, to)))
            .await
    }

    pub async fn me(&self) -> Result<UserInfo, String> {
        self.get("/api/v1/me").await
    }

    pub async fn health(&self) -> Result<HealthResponse, String> {
        self.get("/health").await
    }

    /// GET `path` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let mut request =
            Request::get(&format!("{}{}", self.base, path)).header("Content-Type", "application/json");
        if let Some(key) = self.store.get().filter(|key| !key.is_empty()) {
            request = request.header(API_KEY_HEADER, &key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        handle_response(response).await
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let body = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .map(|json| ApiError { error: json.get("error").cloned() });
        return Err(error_message(response.status(), &response.status_text(), body));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Message for a failed response: the body's `error`, else the status text,
/// else `HTTP <code>`
pub fn error_message(status: u16, status_text: &str, body: Option<ApiError>) -> String {
    let message = match body {
        Some(body) => body.message(),
        None => status_text.to_string(),
    };
    if message.is_empty() {
        format!("HTTP {}", status)
    } else {
        message
    }
}

/// `?from=..&to=..` with empty bounds left out
pub fn query_string(from: Option<&str>, to: Option<&str>) -> String {
    let params: Vec<String> = [("from", from), ("to", to)]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", name, urlencoding::encode(v)))
        })
        .collect();

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body(json: &str) -> Option<ApiError> {
        serde_json::from_str(json).ok()
    }

    #[test]
    fn test_error_message_prefers_body() {
        let body = error_body(r#"{"error":"bad key"}"#);
        assert_eq!(error_message(401, "Unauthorized", body), "bad key");
    }

    #[test]
    fn test_error_message_falls_back_to_status_text() {
        assert_eq!(error_message(503, "Service Unavailable", None), "Service Unavailable");
    }

    #[test]
    fn test_error_message_falls_back_to_code() {
        assert_eq!(error_message(502, "", None), "HTTP 502");
        assert_eq!(error_message(400, "Bad Request", error_body(r#"{"error":""}"#)), "HTTP 400");
        assert_eq!(error_message(400, "Bad Request", error_body("{}")), "HTTP 400");
    }

    #[test]
    fn test_error_message_non_string_error() {
        assert_eq!(error_message(400, "Bad Request", error_body(r#"{"error":null}"#)), "HTTP 400");
        assert_eq!(error_message(400, "Bad Request", error_body(r#"{"error":42}"#)), "42");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(query_string(None, None), "");
        assert_eq!(query_string(Some(""), Some("")), "");
        assert_eq!(
            query_string(Some("2024-01-01"), Some("2024-01-31")),
            "?from=2024-01-01&to=2024-01-31"
        );
        assert_eq!(query_string(None, Some("2024-01-31")), "?to=2024-01-31");
        assert_eq!(
            query_string(Some("2024-01-01T00:00:00+02:00"), None),
            "?from=2024-01-01T00%3A00%3A00%2B02%3A00"
        );
    }
}
