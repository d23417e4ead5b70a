use serde::{Deserialize, Serialize};

/// A document selected by the user for ingestion.
///
/// Carries the raw bytes so the core stays independent of browser file
/// handles; the app layer fills this from egui dropped files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}
