//! In-memory credential store

use std::sync::RwLock;

use super::{CredentialError, CredentialStore};

/// Process-local credential store.
///
/// Used when the key comes from `--key` or `TF_API_KEY` and must not be
/// written to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    key: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key`
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: RwLock::new(Some(key.into())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Result<Option<String>, CredentialError> {
        let guard = self.key.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn set(&self, key: &str) -> Result<(), CredentialError> {
        let mut guard = self.key.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(key.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let mut guard = self.key.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
