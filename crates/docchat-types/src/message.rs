use serde::{Deserialize, Serialize};

/// Who authored a transcript message.
///
/// Serialized lowercase because the persisted transcript stores
/// `"sender": "user" | "bot"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message in the conversation transcript.
///
/// Immutable once appended; the append order is the display order.
/// Field names (`sender`, `text`) are part of the persisted layout and
/// must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}
