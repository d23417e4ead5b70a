//! UI-level state that drives rendering.
//! This is a read-only projection of the session controller state,
//! updated each frame by draining the EventBus.
//!
//! The transcript has a single owner: the controller appends messages
//! and the `MessageAppended` event replays them here, so panels never
//! push into this list themselves.

use docchat_types::event::{RequestKind, SessionEvent};
use docchat_types::message::Message;

/// State visible to UI panels
pub struct UiState {
    /// Displayed transcript (user + bot messages)
    pub messages: Vec<Message>,
    /// Whether the query gate is open (at least one successful upload)
    pub documents_ready: bool,
    /// Whether a gateway request is in flight; disables Send/Upload
    pub busy: bool,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            documents_ready: false,
            busy: false,
            input_text: String::new(),
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::Restored {
                    messages,
                    documents_ready,
                } => {
                    self.messages = messages;
                    self.documents_ready = documents_ready;
                }
                SessionEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                SessionEvent::RequestStart { kind } => {
                    self.busy = true;
                    self.status_text = match kind {
                        RequestKind::Ingest => "Processing PDFs...".to_string(),
                        RequestKind::Query => "Bot is thinking...".to_string(),
                    };
                }
                SessionEvent::RequestEnd { .. } => {
                    self.busy = false;
                    self.status_text = "Ready".to_string();
                }
                SessionEvent::DocumentsReady { count } => {
                    log::info!("Documents ready ({} accepted)", count);
                    self.documents_ready = true;
                }
                SessionEvent::Cleared => {
                    self.messages.clear();
                    self.documents_ready = false;
                    self.status_text = "Ready".to_string();
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
