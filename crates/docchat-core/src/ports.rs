//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `docchat-core` (pure Rust).
//! Implementations live in `docchat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use docchat_types::{document::DocumentFile, Result};

// ─── Storage Port ────────────────────────────────────────────

/// Durable string key-value storage surviving page reloads.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    async fn remove(&self, key: &str) -> Result<()>;

    /// Remove every key in the store, not just the ones this
    /// application tracks (full reset semantics)
    async fn clear(&self) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Ingestion Port ──────────────────────────────────────────

/// Submits documents to the remote service so later queries can
/// reference their content.
#[async_trait(?Send)]
pub trait IngestPort {
    /// Upload the given documents and return the accepted count.
    ///
    /// Callers must not pass an empty slice; the controller rejects
    /// empty selections before this port is reached.
    async fn ingest(&self, files: &[DocumentFile]) -> Result<usize>;
}

// ─── Query Port ──────────────────────────────────────────────

/// Asks the remote service a single question about the ingested documents.
#[async_trait(?Send)]
pub trait QueryPort {
    /// Send one query and return the answer text.
    ///
    /// Callers must pass non-empty trimmed text; the controller rejects
    /// blank input before this port is reached.
    async fn query(&self, text: &str) -> Result<String>;
}
