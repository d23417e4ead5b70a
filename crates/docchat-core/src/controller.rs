//! Session controller — the session state machine.
//!
//! Owns the transcript, the document-ingestion gate, and the in-flight
//! request flag. Each user-triggered operation is one request/response
//! cycle with a single suspension point (the gateway call):
//!
//!   Idle → Dispatched → (Settled-Success | Settled-Failure) → Idle
//!
//! Gateway and storage failures never escape these methods: a failure is
//! surfaced once as a fixed bot message (or a log line for storage), and
//! `pending` is reset on every settle path.

use docchat_types::{
    document::DocumentFile,
    event::{RequestKind, SessionEvent},
    message::Message,
    ChatError, Result,
};

use crate::event_bus::EventBus;
use crate::ports::{IngestPort, QueryPort};
use crate::store::SessionStore;

/// Appended locally when a query arrives before any successful ingestion
pub const GATE_WARNING: &str = "⚠️ Please upload at least one PDF before chatting.";
/// Appended when the ingestion gateway fails
pub const UPLOAD_FAILURE: &str = "❌ Failed to upload PDFs. Try again.";
/// Appended when the query gateway fails
pub const QUERY_FAILURE: &str = "❌ Error fetching response.";

/// Success notice for an accepted upload of `count` documents
pub fn upload_success(count: usize) -> String {
    format!(
        "✅ {} new PDF(s) added! You can now ask about all uploaded documents.",
        count
    )
}

/// The session state machine.
pub struct SessionController {
    /// Chronological transcript; append-only except [`Self::clear`]
    pub messages: Vec<Message>,
    /// True only after at least one successful ingestion since the last clear
    pub documents_ready: bool,
    /// True while exactly one gateway request is in flight
    pub pending: bool,
    event_bus: EventBus,
}

impl SessionController {
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            messages: Vec::new(),
            documents_ready: false,
            pending: false,
            event_bus,
        }
    }

    /// Rebuild state from the persistent store at startup.
    pub async fn restore(&mut self, store: &SessionStore) {
        let snapshot = store.load().await;
        self.messages = snapshot.messages.clone();
        self.documents_ready = snapshot.documents_ready;
        log::info!(
            "Session restored: {} message(s), documents_ready={}",
            self.messages.len(),
            self.documents_ready
        );
        self.event_bus.emit(SessionEvent::Restored {
            messages: snapshot.messages,
            documents_ready: snapshot.documents_ready,
        });
    }

    /// Send one user query.
    ///
    /// Blank input is a no-op. While the gate is closed the user message
    /// and a fixed warning are appended synchronously and no network call
    /// is made. Otherwise the user message is appended and persisted
    /// before the gateway call resolves, so the transcript shows the
    /// question immediately; the answer (or failure text) follows
    /// strictly after, preserving user-then-bot pairing.
    pub async fn send(&mut self, input: &str, query: &dyn QueryPort, store: &SessionStore) {
        let text = input.trim();
        if text.is_empty() {
            return;
        }

        if let Err(e) = self.ensure_ready() {
            log::info!("Query blocked: {}", e);
            self.append(Message::user(text));
            self.append(Message::bot(GATE_WARNING));
            self.persist(store).await;
            return;
        }

        self.append(Message::user(text));
        self.persist(store).await;

        self.pending = true;
        self.event_bus.emit(SessionEvent::RequestStart {
            kind: RequestKind::Query,
        });

        let reply = match query.query(text).await {
            Ok(answer) => answer,
            Err(e) => {
                log::error!("Query failed: {}", e);
                QUERY_FAILURE.to_string()
            }
        };

        self.append(Message::bot(reply));
        self.pending = false;
        self.event_bus.emit(SessionEvent::RequestEnd {
            kind: RequestKind::Query,
        });
        self.persist(store).await;
    }

    /// Upload one or more documents.
    ///
    /// An empty selection is a no-op. On success the gate opens and stays
    /// open until [`Self::clear`]; a failure leaves it unchanged.
    pub async fn upload(
        &mut self,
        files: &[DocumentFile],
        ingest: &dyn IngestPort,
        store: &SessionStore,
    ) {
        if files.is_empty() {
            return;
        }

        self.pending = true;
        self.event_bus.emit(SessionEvent::RequestStart {
            kind: RequestKind::Ingest,
        });

        match ingest.ingest(files).await {
            Ok(count) => {
                self.documents_ready = true;
                self.event_bus.emit(SessionEvent::DocumentsReady { count });
                self.append(Message::bot(upload_success(count)));
            }
            Err(e) => {
                log::error!("Upload failed: {}", e);
                self.append(Message::bot(UPLOAD_FAILURE));
            }
        }

        self.pending = false;
        self.event_bus.emit(SessionEvent::RequestEnd {
            kind: RequestKind::Ingest,
        });
        self.persist(store).await;
    }

    /// Reset the session to its initial empty state and erase the store.
    /// Idempotent; no gateway interaction.
    pub async fn clear(&mut self, store: &SessionStore) {
        self.messages.clear();
        self.documents_ready = false;
        if let Err(e) = store.clear().await {
            log::warn!("Failed to clear persistent store: {}", e);
        }
        self.event_bus.emit(SessionEvent::Cleared);
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.documents_ready {
            Ok(())
        } else {
            Err(ChatError::GateBlocked)
        }
    }

    fn append(&mut self, message: Message) {
        self.messages.push(message.clone());
        self.event_bus.emit(SessionEvent::MessageAppended { message });
    }

    async fn persist(&self, store: &SessionStore) {
        if let Err(e) = store.save(&self.messages, self.documents_ready).await {
            log::warn!("Failed to persist session: {}", e);
        }
    }
}
