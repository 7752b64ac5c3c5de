//! Shared state for the development server handlers

use reqwest::Client;

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Client used to reach the backend
    pub http: Client,
    /// Backend base URL, without trailing slash
    pub backend_url: String,
}

impl ServerState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
        }
    }
}
