//! Credential Store
//!
//! Persistent storage for the single API key the client authenticates with.
//!
//! The store is the only source of truth for authentication state. It is
//! handed to [`ApiClient`](crate::api::ApiClient) at construction and read at
//! the start of every request, so `set`/`clear` take effect on the next call.
//!
//! - [`FileStore`]: TOML file under the user's config directory
//! - [`MemoryStore`]: process-local, for overrides and tests

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Storage for at most one API key
pub trait CredentialStore: Send + Sync {
    /// The stored key, if any
    fn get(&self) -> Result<Option<String>, CredentialError>;

    /// Persist `key`, replacing any previous value
    fn set(&self, key: &str) -> Result<(), CredentialError>;

    /// Remove the stored key. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), CredentialError>;

    /// Whether a non-empty key is currently stored
    fn has(&self) -> bool {
        matches!(self.get(), Ok(Some(key)) if !key.is_empty())
    }
}

/// Credential storage errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to access credentials file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse credentials file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Failed to serialize credentials: {0}")]
    Serialize(String),
}
