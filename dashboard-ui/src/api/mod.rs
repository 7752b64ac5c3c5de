//! TimeForged API
//!
//! Typed client, response types and the browser key store.

pub mod client;
pub mod storage;
pub mod types;

pub use client::ApiClient;
pub use storage::KeyStore;
pub use types::*;
