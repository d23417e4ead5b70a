//! Window.localStorage storage backend.
//! Persistent across page reloads. Works in all modern browsers.
//!
//! The underlying API is synchronous; the async port methods complete
//! immediately.

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use docchat_core::ports::StoragePort;
use docchat_types::{ChatError, Result};

pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    /// Grab the window's localStorage, failing when the embedder
    /// disables it (private browsing modes, sandboxed iframes).
    pub fn new() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ChatError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(storage_err)?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorageBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_err)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // Fails when the quota is exhausted
        self.storage.set_item(key, value).map_err(storage_err)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(storage_err)
    }

    async fn clear(&self) -> Result<()> {
        self.storage.clear().map_err(storage_err)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn storage_err(e: JsValue) -> ChatError {
    ChatError::Storage(format!("{:?}", e))
}
