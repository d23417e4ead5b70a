//! HTTP gateway to the document/query backend.
//!
//! Speaks the two contracted operations against a configurable base URL:
//! multipart document upload (batch or legacy single-file route) and the
//! form-encoded `/chat/` query. Uses browser `fetch()` via gloo-net for
//! WASM compatibility. This component performs no local state mutation;
//! it only translates each call's outcome into a typed result or error.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use web_sys::{Blob, FormData};

use docchat_core::ports::{IngestPort, QueryPort};
use docchat_types::{
    config::{BackendConfig, IngestRoute},
    document::DocumentFile,
    ChatError, Result,
};

/// Substituted when the backend's reply omits or blanks the answer field
pub const EMPTY_ANSWER_FALLBACK: &str = "No response from AI.";

pub struct BackendGateway {
    config: BackendConfig,
}

impl BackendGateway {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    fn pdf_blob(file: &DocumentFile) -> Result<Blob> {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        Blob::new_with_u8_array_sequence(&parts).map_err(js_err)
    }

    /// One request, field `files` repeated once per document.
    async fn ingest_batch(&self, files: &[DocumentFile]) -> Result<()> {
        let form = FormData::new().map_err(js_err)?;
        for file in files {
            form.append_with_blob_and_filename("files", &Self::pdf_blob(file)?, &file.name)
                .map_err(js_err)?;
        }
        self.post_upload(&self.url("/upload-pdfs/"), form).await
    }

    /// One request per document, field `file`, for older servers.
    async fn ingest_single(&self, file: &DocumentFile) -> Result<()> {
        let form = FormData::new().map_err(js_err)?;
        form.append_with_blob_and_filename("file", &Self::pdf_blob(file)?, &file.name)
            .map_err(js_err)?;
        self.post_upload(&self.url("/upload-pdf/"), form).await
    }

    async fn post_upload(&self, url: &str, form: FormData) -> Result<()> {
        // No explicit Content-Type: the browser supplies the multipart
        // boundary for FormData bodies.
        let response = Request::post(url)
            .body(form)
            .map_err(|e| ChatError::Ingestion(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Ingestion(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Ingestion(format!("HTTP {}", response.status())));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl IngestPort for BackendGateway {
    async fn ingest(&self, files: &[DocumentFile]) -> Result<usize> {
        match self.config.ingest_route {
            IngestRoute::Batch => self.ingest_batch(files).await?,
            IngestRoute::LegacySingle => {
                for file in files {
                    self.ingest_single(file).await?;
                }
            }
        }
        // The server's response body carries no count; it is the number
        // of documents we sent.
        Ok(files.len())
    }
}

#[async_trait(?Send)]
impl QueryPort for BackendGateway {
    async fn query(&self, text: &str) -> Result<String> {
        let form = FormData::new().map_err(js_err)?;
        form.append_with_str("query", text).map_err(js_err)?;

        let response = Request::post(&self.url("/chat/"))
            .body(form)
            .map_err(|e| ChatError::Query(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Query(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Query(format!("HTTP {}", response.status())));
        }

        let data: ChatAnswer = response
            .json()
            .await
            .map_err(|e| ChatError::Query(e.to_string()))?;

        Ok(data
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| EMPTY_ANSWER_FALLBACK.to_string()))
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ChatAnswer {
    #[serde(default)]
    answer: Option<String>,
}

fn js_err(e: JsValue) -> ChatError {
    ChatError::JsInterop(format!("{:?}", e))
}
