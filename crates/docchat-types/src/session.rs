use serde::{Deserialize, Serialize};

use crate::message::Message;

/// The persisted subset of session state.
///
/// This is what survives a page reload: the transcript and whether the
/// query gate is open. The in-flight `pending` flag is deliberately not
/// part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub documents_ready: bool,
}
