//! API Key Storage
//!
//! The key lives in `window.localStorage` so it survives reloads. Storage
//! failures (private mode, disabled storage) behave like an empty store.

/// localStorage entry holding the API key
pub const API_KEY_STORAGE_KEY: &str = "tf_api_key";

/// Browser-backed credential store
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyStore;

impl KeyStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get(&self) -> Option<String> {
        Self::storage()?.get_item(API_KEY_STORAGE_KEY).ok().flatten()
    }

    /// Store the key, replacing any previous one
    pub fn set(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(API_KEY_STORAGE_KEY, key).is_err() {
                web_sys::console::warn_1(&"Failed to persist API key".into());
            }
        }
    }

    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(API_KEY_STORAGE_KEY);
        }
    }

    /// True when a non-empty key is stored
    pub fn has(&self) -> bool {
        self.get().is_some_and(|key| !key.is_empty())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_get_clear() {
        let store = KeyStore;
        store.clear();
        assert!(!store.has());

        store.set("abc123");
        assert_eq!(store.get().as_deref(), Some("abc123"));
        assert!(store.has());

        store.set("def456");
        assert_eq!(store.get().as_deref(), Some("def456"));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[wasm_bindgen_test]
    fn test_empty_key_counts_as_absent() {
        let store = KeyStore;
        store.set("");
        assert!(!store.has());
        store.clear();
    }
}
