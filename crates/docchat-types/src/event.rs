use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Which remote operation a request lifecycle event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    Ingest,
    Query,
}

/// Events emitted by the session controller.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Session state was rebuilt from the persistent store at startup
    Restored {
        messages: Vec<Message>,
        documents_ready: bool,
    },

    /// A message was appended to the transcript
    MessageAppended { message: Message },

    /// A gateway request was dispatched
    RequestStart { kind: RequestKind },

    /// The in-flight gateway request settled (success or failure)
    RequestEnd { kind: RequestKind },

    /// An ingestion succeeded and the query gate is now open
    DocumentsReady { count: usize },

    /// The session was reset to its initial empty state
    Cleared,
}
