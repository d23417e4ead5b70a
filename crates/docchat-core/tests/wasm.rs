//! WASM-target tests for docchat-core.
//!
//! Runs EventBus, SessionStore, and SessionController tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen_test::*;

use docchat_core::controller::{SessionController, GATE_WARNING, QUERY_FAILURE};
use docchat_core::event_bus::EventBus;
use docchat_core::ports::{IngestPort, QueryPort, StoragePort};
use docchat_core::store::SessionStore;
use docchat_types::document::DocumentFile;
use docchat_types::event::SessionEvent;
use docchat_types::message::Message;
use docchat_types::{ChatError, Result};

// ─── Mock Ports ──────────────────────────────────────────

struct MapStorage {
    data: RefCell<HashMap<String, String>>,
}

impl MapStorage {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            data: RefCell::new(HashMap::new()),
        })
    }
}

#[async_trait(?Send)]
impl StoragePort for MapStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.data.borrow_mut().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.data.borrow_mut().clear();
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "map"
    }
}

struct FixedQuery {
    answer: Option<&'static str>,
    calls: RefCell<usize>,
}

#[async_trait(?Send)]
impl QueryPort for FixedQuery {
    async fn query(&self, _text: &str) -> Result<String> {
        *self.calls.borrow_mut() += 1;
        match self.answer {
            Some(a) => Ok(a.to_string()),
            None => Err(ChatError::Query("offline".to_string())),
        }
    }
}

struct CountingIngest;

#[async_trait(?Send)]
impl IngestPort for CountingIngest {
    async fn ingest(&self, files: &[DocumentFile]) -> Result<usize> {
        Ok(files.len())
    }
}

fn pdf(name: &str) -> DocumentFile {
    DocumentFile::new(name, b"%PDF-1.4".to_vec())
}

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(SessionEvent::Cleared);
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

// ─── SessionStore Tests ──────────────────────────────────

#[wasm_bindgen_test]
async fn store_save_load_roundtrip() {
    let store = SessionStore::new(MapStorage::new());
    let messages = vec![Message::user("q"), Message::bot("a")];

    store.save(&messages, true).await.unwrap();
    let snapshot = store.load().await;

    assert_eq!(snapshot.messages, messages);
    assert!(snapshot.documents_ready);
}

// ─── Controller Tests ────────────────────────────────────

#[wasm_bindgen_test]
async fn gated_send_appends_warning_without_network() {
    let store = SessionStore::new(MapStorage::new());
    let mut controller = SessionController::new(EventBus::new());
    let query = FixedQuery {
        answer: Some("unused"),
        calls: RefCell::new(0),
    };

    controller.send("hello", &query, &store).await;

    assert_eq!(controller.messages.len(), 2);
    assert_eq!(controller.messages[1], Message::bot(GATE_WARNING));
    assert_eq!(*query.calls.borrow(), 0);
}

#[wasm_bindgen_test]
async fn upload_then_query_succeeds() {
    let store = SessionStore::new(MapStorage::new());
    let mut controller = SessionController::new(EventBus::new());

    controller.upload(&[pdf("a.pdf")], &CountingIngest, &store).await;
    assert!(controller.documents_ready);

    let query = FixedQuery {
        answer: Some("Y"),
        calls: RefCell::new(0),
    };
    controller.send("What is X?", &query, &store).await;

    assert_eq!(controller.messages.last().unwrap(), &Message::bot("Y"));
    assert!(!controller.pending);
}

#[wasm_bindgen_test]
async fn query_failure_appends_fixed_text() {
    let store = SessionStore::new(MapStorage::new());
    let mut controller = SessionController::new(EventBus::new());
    controller.upload(&[pdf("a.pdf")], &CountingIngest, &store).await;

    let query = FixedQuery {
        answer: None,
        calls: RefCell::new(0),
    };
    controller.send("Z?", &query, &store).await;

    assert_eq!(
        controller.messages.last().unwrap(),
        &Message::bot(QUERY_FAILURE)
    );
    assert!(controller.documents_ready);
    assert!(!controller.pending);
}

#[wasm_bindgen_test]
async fn clear_resets_session() {
    let store = SessionStore::new(MapStorage::new());
    let mut controller = SessionController::new(EventBus::new());
    controller.upload(&[pdf("a.pdf")], &CountingIngest, &store).await;

    controller.clear(&store).await;

    assert!(controller.messages.is_empty());
    assert!(!controller.documents_ready);
    assert!(store.load().await.messages.is_empty());
}
