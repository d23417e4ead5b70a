//! Session persistence over a [`StoragePort`].
//!
//! Two string-valued keys mirror the transcript and the query gate.
//! Loading tolerates missing keys and malformed content by falling back
//! to the empty session; it never fails the caller.

use std::rc::Rc;

use docchat_types::{message::Message, session::SessionSnapshot, Result};

use crate::ports::StoragePort;

/// Key holding the serialized transcript (JSON array of {sender, text})
pub const MESSAGES_KEY: &str = "chat_messages";
/// Key holding the query gate flag ("true" / "false")
pub const DOCUMENTS_READY_KEY: &str = "pdf_uploaded";

/// Write-through persistence for the two tracked session fields.
pub struct SessionStore {
    storage: Rc<dyn StoragePort>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn StoragePort>) -> Self {
        Self { storage }
    }

    /// Rebuild the persisted session state.
    ///
    /// Absent keys, storage failures, and unparsable JSON all yield the
    /// empty default rather than an error.
    pub async fn load(&self) -> SessionSnapshot {
        let messages = match self.storage.get(MESSAGES_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Discarding malformed persisted transcript: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read persisted transcript: {}", e);
                Vec::new()
            }
        };

        let documents_ready = matches!(
            self.storage.get(DOCUMENTS_READY_KEY).await,
            Ok(Some(flag)) if flag == "true"
        );

        SessionSnapshot {
            messages,
            documents_ready,
        }
    }

    /// Persist both tracked fields. Called after every mutation step.
    pub async fn save(&self, messages: &[Message], documents_ready: bool) -> Result<()> {
        let json = serde_json::to_string(messages)?;
        self.storage.set(MESSAGES_KEY, &json).await?;
        self.storage
            .set(
                DOCUMENTS_READY_KEY,
                if documents_ready { "true" } else { "false" },
            )
            .await
    }

    /// Erase the whole store, not just the two tracked keys.
    pub async fn clear(&self) -> Result<()> {
        self.storage.clear().await
    }

    pub fn backend_name(&self) -> &str {
        self.storage.backend_name()
    }
}
