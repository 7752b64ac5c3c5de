//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//!
//! The API key is not part of this file; it lives in the credential store.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::DEFAULT_SERVER_URL;

/// Config file name inside [`config_dir`]
pub const CONFIG_FILE: &str = "dash.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// TimeForged backend base URL
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

/// Development server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Where `/api` and `/health` are forwarded
    #[serde(default = "default_server_url")]
    pub backend_url: String,

    /// Built dashboard assets (`trunk build` output)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Extra origins allowed to call the server cross-origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5173
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("dashboard-ui/dist")
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            backend_url: default_server_url(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServeConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Unset means each binary's own default (`info` for the server,
    /// `error` for the CLI)
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Configured level, or `fallback` when none is set
    pub fn level_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.level.as_deref().unwrap_or(fallback)
    }
}

/// Directory holding the config file and stored credentials
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join("timeforged"))
        .unwrap_or_else(|| PathBuf::from(".timeforged"))
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load from default locations with environment overrides.
    ///
    /// Never fails: problems are returned alongside the config so the caller
    /// can report them once logging is up.
    pub fn load_default() -> (Self, Vec<ConfigError>) {
        let config_paths = [config_dir().join(CONFIG_FILE), PathBuf::from("./tfdash.toml")];
        Self::load_first(&config_paths, |name| std::env::var(name).ok())
    }

    /// First readable file among `paths`, else defaults; then overrides
    fn load_first(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let mut config = Config::default();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(loaded) => {
                    config = loaded;
                    break;
                }
                Err(e) => problems.push(e),
            }
        }

        problems.extend(config.apply_overrides(lookup));
        (config, problems)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<ConfigError> {
        let mut problems = Vec::new();

        // Client overrides
        if let Some(url) = lookup("TF_SERVER_URL") {
            self.client.server_url = url;
        }

        // Development server overrides
        if let Some(host) = lookup("TF_DASH_HOST") {
            self.serve.host = host;
        }
        if let Some(port) = lookup("TF_DASH_PORT") {
            match port.parse() {
                Ok(p) => self.serve.port = p,
                Err(_) => problems.push(ConfigError::Env {
                    name: "TF_DASH_PORT",
                    value: port,
                }),
            }
        }
        if let Some(url) = lookup("TF_BACKEND_URL") {
            self.serve.backend_url = url;
        }
        if let Some(dir) = lookup("TF_DASH_STATIC_DIR") {
            self.serve.static_dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("TF_LOG_LEVEL") {
            self.logging.level = Some(level);
        }
        if let Some(format) = lookup("TF_LOG_FORMAT") {
            self.logging.format = format;
        }

        problems
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Ignoring invalid {name}: {value}")]
    Env { name: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# TimeForged Dashboard Configuration
#
# Environment variables override these settings:
# - TF_SERVER_URL
# - TF_DASH_HOST
# - TF_DASH_PORT
# - TF_BACKEND_URL
# - TF_DASH_STATIC_DIR
# - TF_LOG_LEVEL
# - TF_LOG_FORMAT
#
# The API key is stored separately; set it with `tfdash login <key>`
# or pass TF_API_KEY.

[client]
# TimeForged daemon URL
server_url = "http://127.0.0.1:6175"

[serve]
# Development server host
host = "127.0.0.1"

# Development server port
port = 5173

# Backend that /api and /health are forwarded to
backend_url = "http://127.0.0.1:6175"

# Built dashboard assets
static_dir = "dashboard-ui/dist"

# Allowed CORS origins
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
# (default: info for tfdash-serve, error for tfdash)
# level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();

        assert_eq!(config.client.server_url, defaults.client.server_url);
        assert_eq!(config.serve.addr(), defaults.serve.addr());
        assert_eq!(config.serve.backend_url, "http://127.0.0.1:6175");
        assert_eq!(config.serve.static_dir, PathBuf::from("dashboard-ui/dist"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("[client]\nserver_url = \"http://tf.lan:6175\"\n").unwrap();

        assert_eq!(config.client.server_url, "http://tf.lan:6175");
        assert_eq!(config.serve.port, 5173);
        assert_eq!(config.logging.level, None);
        assert_eq!(config.logging.level_or("info"), "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TF_SERVER_URL", "http://remote:6175"),
            ("TF_DASH_PORT", "8080"),
            ("TF_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.client.server_url, "http://remote:6175");
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.serve.host, "127.0.0.1");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_override_reported() {
        let mut config = Config::default();
        let problems =
            config.apply_overrides(|name| (name == "TF_DASH_PORT").then(|| "not-a-port".to_string()));

        assert_eq!(config.serve.port, 5173);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].to_string(), "Ignoring invalid TF_DASH_PORT: not-a-port");
    }

    #[test]
    fn test_log_level_override() {
        let mut config = Config::default();
        config.apply_overrides(|name| (name == "TF_LOG_LEVEL").then(|| "debug".to_string()));
        assert_eq!(config.logging.level_or("error"), "debug");
    }

    #[test]
    fn test_malformed_file_is_reported_not_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("dash.toml");
        std::fs::write(&broken, "[client\nserver_url = ").unwrap();
        let fallback = dir.path().join("tfdash.toml");
        std::fs::write(&fallback, "[client]\nserver_url = \"http://tf.lan:6175\"\n").unwrap();

        let (config, problems) = Config::load_first(&[broken, fallback], |_| None);

        assert_eq!(config.client.server_url, "http://tf.lan:6175");
        assert_eq!(problems.len(), 1);
        assert!(matches!(problems[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_files_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, problems) =
            Config::load_first(&[dir.path().join("dash.toml")], |name| {
                (name == "TF_SERVER_URL").then(|| "http://remote:6175".to_string())
            });

        assert!(problems.is_empty());
        assert_eq!(config.client.server_url, "http://remote:6175");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/tfdash.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
