//! File-backed credential store
//!
//! Keeps the key in `credentials.toml`:
//!
//! ```toml
//! api_key = "tf_..."
//! ```

use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{CredentialError, CredentialStore};

const CREDENTIALS_FILE: &str = "credentials.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

/// Credential store persisted to a TOML file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config_dir>/timeforged/credentials.toml`
    pub fn open_default() -> Self {
        Self::new(crate::config::config_dir().join(CREDENTIALS_FILE))
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> CredentialError {
        CredentialError::Io {
            path: self.path.clone(),
            error: e.to_string(),
        }
    }

    fn write_file(&self, contents: &str) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(|e| self.io_error(e))?;

        // `mode` only applies on creation; tighten a file that already existed
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .map_err(|e| self.io_error(e))?;
        }

        file.write_all(contents.as_bytes())
            .map_err(|e| self.io_error(e))
    }
}

impl CredentialStore for FileStore {
    fn get(&self) -> Result<Option<String>, CredentialError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let file: CredentialsFile = toml::from_str(&content).map_err(|e| CredentialError::Parse {
            path: self.path.clone(),
            error: e.to_string(),
        })?;

        Ok(file.api_key)
    }

    fn set(&self, key: &str) -> Result<(), CredentialError> {
        let file = CredentialsFile {
            api_key: Some(key.to_string()),
        };
        let contents =
            toml::to_string(&file).map_err(|e| CredentialError::Serialize(e.to_string()))?;

        self.write_file(&contents)?;
        tracing::debug!(path = ?self.path, "API key stored");
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = ?self.path, "API key removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_has_no_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("credentials.toml"));

        assert_eq!(store.get().unwrap(), None);
        assert!(!store.has());
    }

    #[test]
    fn test_set_has_clear() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("credentials.toml"));

        store.set("abc123").unwrap();
        assert!(store.has());
        assert_eq!(store.get().unwrap().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert!(!store.has());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_key_survives_new_instance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.toml");

        FileStore::new(&path).set("first").unwrap();
        FileStore::new(&path).set("second").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_missing_file_succeeds() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("credentials.toml"));
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "api_key = [unterminated").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get(), Err(CredentialError::Parse { .. })));
        assert!(!store.has());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("credentials.toml"));
        store.set("secret").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_file_is_made_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "api_key = \"old\"\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileStore::new(&path);
        store.set("new").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.get().unwrap().as_deref(), Some("new"));
    }
}
