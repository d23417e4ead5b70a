use serde::{Deserialize, Serialize};

/// Top-level client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    pub backend: BackendConfig,
    pub storage: StorageConfig,
}

/// Where and how to reach the document/query backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub endpoint: ApiEndpoint,
    /// Overrides the endpoint's default base URL when set
    pub api_base: Option<String>,
    pub ingest_route: IngestRoute,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: ApiEndpoint::Local,
            api_base: None,
            ingest_route: IngestRoute::Batch,
        }
    }
}

impl BackendConfig {
    /// Effective base URL: the override if present, else the endpoint default.
    pub fn base_url(&self) -> &str {
        self.api_base
            .as_deref()
            .unwrap_or_else(|| self.endpoint.default_base_url())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiEndpoint {
    Local,
    Deployed,
    Custom,
}

impl ApiEndpoint {
    pub fn default_base_url(&self) -> &str {
        match self {
            ApiEndpoint::Local => "http://127.0.0.1:8000",
            ApiEndpoint::Deployed => "https://multi-pdf-ai-chatbot-3.onrender.com",
            ApiEndpoint::Custom => "",
        }
    }

    pub fn all() -> &'static [ApiEndpoint] {
        &[ApiEndpoint::Local, ApiEndpoint::Deployed, ApiEndpoint::Custom]
    }

    pub fn label(&self) -> &str {
        match self {
            ApiEndpoint::Local => "Local",
            ApiEndpoint::Deployed => "Deployed",
            ApiEndpoint::Custom => "Custom",
        }
    }
}

/// Which wire shape uploads use.
///
/// The batch route sends all files in one multipart request; the legacy
/// route exists for older servers that only accept one file per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestRoute {
    /// POST /upload-pdfs/ with the `files` field repeated
    Batch,
    /// POST /upload-pdf/ once per file with a single `file` field
    LegacySingle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
}
