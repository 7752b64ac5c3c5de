//! TimeForged REST API Client
//!
//! One HTTP request per call: read the stored key, decorate the request,
//! decode the typed JSON result. No retries, no caching.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::api::dto::{HealthResponse, HourlyActivity, Session, StatusResponse, Summary, UserInfo};
use crate::api::error::{ClientError, ClientResult};
use crate::api::query::{
    DateRange, ReportQuery, ACTIVITY_PATH, HEALTH_PATH, ME_PATH, SESSIONS_PATH, STATUS_PATH,
    SUMMARY_PATH,
};
use crate::credentials::CredentialStore;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Default backend address (the TimeForged daemon)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:6175";

/// Authenticated client for the TimeForged API
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.credentials.has())
            .finish()
    }
}

impl ApiClient {
    /// Create a client for `base_url` reading its key from `credentials`
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self::with_http_client(Client::new(), base_url, credentials)
    }

    /// Create a client on top of an existing `reqwest::Client`
    pub fn with_http_client(
        http: Client,
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            credentials,
        }
    }

    /// Backend base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store this client reads from
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/v1/status`
    pub async fn status(&self) -> ClientResult<StatusResponse> {
        self.get(STATUS_PATH).await
    }

    /// `GET /api/v1/reports/summary`, optionally bounded
    pub async fn summary(&self, from: Option<&str>, to: Option<&str>) -> ClientResult<Summary> {
        self.summary_for(&DateRange::new(from, to).into()).await
    }

    /// `GET /api/v1/reports/sessions`, optionally bounded
    pub async fn sessions(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> ClientResult<Vec<Session>> {
        self.sessions_for(&DateRange::new(from, to).into()).await
    }

    /// `GET /api/v1/reports/activity`, optionally bounded
    pub async fn activity(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> ClientResult<Vec<HourlyActivity>> {
        self.activity_for(&DateRange::new(from, to).into()).await
    }

    /// Summary with project/language filters
    pub async fn summary_for(&self, query: &ReportQuery) -> ClientResult<Summary> {
        self.get(&query.apply(SUMMARY_PATH)).await
    }

    pub async fn sessions_for(&self, query: &ReportQuery) -> ClientResult<Vec<Session>> {
        self.get(&query.apply(SESSIONS_PATH)).await
    }

    pub async fn activity_for(&self, query: &ReportQuery) -> ClientResult<Vec<HourlyActivity>> {
        self.get(&query.apply(ACTIVITY_PATH)).await
    }

    /// `GET /api/v1/me`
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get(ME_PATH).await
    }

    /// `GET /health`; answers without a valid key
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get(HEALTH_PATH).await
    }

    /// The key to send, if any.
    ///
    /// An unreadable store counts as empty, the same as
    /// [`CredentialStore::has`]: the request goes out unauthenticated.
    fn stored_key(&self) -> Option<String> {
        match self.credentials.get() {
            Ok(key) => key.filter(|k| !k.is_empty()),
            Err(e) => {
                tracing::warn!("Ignoring unreadable API key: {}", e);
                None
            }
        }
    }

    /// Issue a `GET` for `path` (including any query string)
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let key = self.stored_key();

        let mut request = self
            .http
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(ref key) = key {
            request = request.header(API_KEY_HEADER, key);
        }

        tracing::debug!(path, authenticated = key.is_some(), "GET");

        let response = request.send().await?;
        handle_response(path, response).await
    }
}

async fn handle_response<T: DeserializeOwned>(path: &str, response: Response) -> ClientResult<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
    } else {
        // An unreadable error body falls back to the status text
        let body = response.bytes().await.unwrap_or_default();
        let error = ClientError::from_response(status, &body);
        tracing::warn!(path, status = status.as_u16(), error = %error, "API request failed");
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{FileStore, MemoryStore};
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode, Uri},
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// What the stub backend saw for each request: (X-Api-Key, Content-Type, path+query)
    type Seen = Arc<Mutex<Vec<(Option<String>, Option<String>, String)>>>;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn header(headers: &HeaderMap, name: &str) -> Option<String> {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    async fn record(State(seen): State<Seen>, headers: HeaderMap, uri: Uri) -> Json<Value> {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default();
        seen.lock().unwrap().push((
            header(&headers, "x-api-key"),
            header(&headers, "content-type"),
            path,
        ));
        Json(json!([]))
    }

    async fn recording_backend() -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/api/v1/reports/sessions", get(record))
            .route("/api/v1/reports/activity", get(record))
            .with_state(Arc::clone(&seen));
        (spawn_stub(router).await, seen)
    }

    fn summary_json() -> Value {
        json!({
            "total_seconds": 9000.5,
            "from": "2024-01-01T00:00:00Z",
            "to": "2024-01-31T00:00:00Z",
            "projects": [
                {"name": "timeforged", "total_seconds": 5625.5, "percent": 62.5},
                {"name": "dotfiles", "total_seconds": 3375.0, "percent": 37.5}
            ],
            "languages": [
                {"name": "Rust", "total_seconds": 9000.5, "percent": 100.0}
            ],
            "days": [
                {"date": "2024-01-15", "total_seconds": 9000.5}
            ]
        })
    }

    #[tokio::test]
    async fn test_summary_scenario() {
        async fn summary(headers: HeaderMap, uri: Uri) -> impl IntoResponse {
            let key_ok = header(&headers, "x-api-key").as_deref() == Some("abc123");
            let path_ok = uri.path_and_query().map(|pq| pq.as_str())
                == Some("/api/v1/reports/summary?from=2024-01-01&to=2024-01-31");

            if key_ok && path_ok {
                (StatusCode::OK, Json(summary_json()))
            } else {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": format!("unexpected request {}", uri)})),
                )
            }
        }

        let base = spawn_stub(Router::new().route("/api/v1/reports/summary", get(summary))).await;
        let store = Arc::new(MemoryStore::new());
        store.set("abc123").unwrap();
        let client = ApiClient::new(base, store);

        let result = client
            .summary(Some("2024-01-01"), Some("2024-01-31"))
            .await
            .unwrap();

        assert_eq!(serde_json::to_value(&result).unwrap(), summary_json());
        assert_eq!(result.projects.len(), 2);
        assert_eq!(result.projects[0].percent, 62.5);
    }

    #[tokio::test]
    async fn test_key_header_present_and_absent() {
        let (base, seen) = recording_backend().await;
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(base, store.clone());

        client.sessions(None, None).await.unwrap();
        store.set("k-1").unwrap();
        client.sessions(None, None).await.unwrap();
        store.clear().unwrap();
        client.sessions(None, None).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].0, None);
        assert_eq!(seen[1].0.as_deref(), Some("k-1"));
        assert_eq!(seen[2].0, None);
        assert!(seen
            .iter()
            .all(|(_, content_type, _)| content_type.as_deref() == Some("application/json")));
    }

    #[tokio::test]
    async fn test_credential_change_applies_to_next_call() {
        let (base, seen) = recording_backend().await;
        let store = Arc::new(MemoryStore::with_key("old"));
        let client = ApiClient::new(base, store.clone());

        client.activity(None, None).await.unwrap();
        store.set("new").unwrap();
        client.activity(None, None).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].0.as_deref(), Some("old"));
        assert_eq!(seen[1].0.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_query_parameters_on_the_wire() {
        let (base, seen) = recording_backend().await;
        let client = ApiClient::new(base, Arc::new(MemoryStore::new()));

        client.sessions(None, None).await.unwrap();
        client.sessions(Some("2024-02-01"), None).await.unwrap();
        client.activity(None, Some("2024-02-29")).await.unwrap();
        client
            .activity(Some("2024-02-01"), Some("2024-02-29"))
            .await
            .unwrap();

        let paths: Vec<String> = seen.lock().unwrap().iter().map(|s| s.2.clone()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/v1/reports/sessions",
                "/api/v1/reports/sessions?from=2024-02-01",
                "/api/v1/reports/activity?to=2024-02-29",
                "/api/v1/reports/activity?from=2024-02-01&to=2024-02-29",
            ]
        );
    }

    #[tokio::test]
    async fn test_status_and_me_decode() {
        let router = Router::new()
            .route(
                "/api/v1/status",
                get(|| async {
                    Json(json!({"status": "ok", "version": "0.3.1", "user_count": 2, "event_count": 1500}))
                }),
            )
            .route(
                "/api/v1/me",
                get(|| async {
                    Json(json!({
                        "id": "6f1c2a9e-7a53-4c39-9a8e-1f2b3c4d5e6f",
                        "username": "ada",
                        "display_name": null
                    }))
                }),
            );
        let client = ApiClient::new(spawn_stub(router).await, Arc::new(MemoryStore::new()));

        let status = client.status().await.unwrap();
        assert_eq!(
            status,
            StatusResponse {
                status: "ok".to_string(),
                version: "0.3.1".to_string(),
                user_count: 2,
                event_count: 1500,
            }
        );

        let me = client.me().await.unwrap();
        assert_eq!(me.username, "ada");
        assert_eq!(me.display_name, None);
        assert_eq!(me.id.to_string(), "6f1c2a9e-7a53-4c39-9a8e-1f2b3c4d5e6f");
    }

    #[tokio::test]
    async fn test_error_body_message() {
        let router = Router::new().route(
            "/api/v1/me",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"}))) }),
        );
        let client = ApiClient::new(spawn_stub(router).await, Arc::new(MemoryStore::with_key("x")));

        let err = client.me().await.unwrap_err();
        assert_eq!(err.to_string(), "bad key");
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn test_unparsable_error_body_uses_status_text() {
        let router = Router::new().route(
            "/api/v1/status",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "<h1>down</h1>") }),
        );
        let client = ApiClient::new(spawn_stub(router).await, Arc::new(MemoryStore::new()));

        let err = client.status().await.unwrap_err();
        assert_eq!(err.to_string(), "Service Unavailable");
        assert_eq!(err.status(), Some(503));
    }

    #[tokio::test]
    async fn test_mismatched_body_is_decode_error() {
        let router = Router::new().route(
            "/api/v1/reports/activity",
            get(|| async { Json(json!({"not": "a list"})) }),
        );
        let client = ApiClient::new(spawn_stub(router).await, Arc::new(MemoryStore::new()));

        let err = client.activity(None, None).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{}", addr), Arc::new(MemoryStore::new()));
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert!(err.is_connect());
    }

    #[tokio::test]
    async fn test_project_filter_on_the_wire() {
        let (base, seen) = recording_backend().await;
        let client = ApiClient::new(base, Arc::new(MemoryStore::new()));

        let query = ReportQuery::new(DateRange::between("2024-01-01", "2024-01-31")).project("tf");
        client.activity_for(&query).await.unwrap();

        assert_eq!(
            seen.lock().unwrap()[0].2,
            "/api/v1/reports/activity?from=2024-01-01&to=2024-01-31&project=tf"
        );
    }

    #[tokio::test]
    async fn test_unreadable_store_sends_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "api_key = [unterminated").unwrap();
        let store = Arc::new(FileStore::new(&path));
        assert!(!store.has());

        let (base, seen) = recording_backend().await;
        let client = ApiClient::new(base, store);

        client.sessions(None, None).await.unwrap();
        assert_eq!(seen.lock().unwrap()[0].0, None);
    }

    #[tokio::test]
    async fn test_health_with_unreadable_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "api_key = [unterminated").unwrap();

        let router = Router::new().route(
            "/health",
            get(|| async { Json(json!({"status": "ok", "version": "0.3.1"})) }),
        );
        let client = ApiClient::new(spawn_stub(router).await, Arc::new(FileStore::new(&path)));

        let health = client.health().await.unwrap();
        assert_eq!(health.status, "ok");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:6175/", Arc::new(MemoryStore::new()));
        assert_eq!(client.base_url(), "http://localhost:6175");
        assert_eq!(client.url(STATUS_PATH), "http://localhost:6175/api/v1/status");
    }
}
