#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::document::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::session::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "Hello");
    }

    #[test]
    fn test_message_bot() {
        let msg = Message::bot("Hi there");
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, "Hi there");
    }

    #[test]
    fn test_sender_serialization_is_lowercase() {
        let json = serde_json::to_string(&Sender::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Sender::Bot).unwrap();
        assert_eq!(json, r#""bot""#);
    }

    #[test]
    fn test_message_wire_field_names() {
        // The persisted transcript layout is {"sender": ..., "text": ...}.
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);
    }

    #[test]
    fn test_message_deserialization() {
        let msg: Message = serde_json::from_str(r#"{"sender":"bot","text":"answer"}"#).unwrap();
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.text, "answer");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("What is X?");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    // ─── DocumentFile Tests ──────────────────────────────────

    #[test]
    fn test_document_file_new() {
        let doc = DocumentFile::new("report.pdf", vec![1, 2, 3]);
        assert_eq!(doc.name, "report.pdf");
        assert_eq!(doc.bytes, vec![1, 2, 3]);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_session_event_serialization() {
        let event = SessionEvent::MessageAppended {
            message: Message::bot("done"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("MessageAppended"));
        assert!(json.contains("done"));
    }

    #[test]
    fn test_request_kind_roundtrip() {
        let json = serde_json::to_string(&RequestKind::Ingest).unwrap();
        let kind: RequestKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, RequestKind::Ingest);
    }

    #[test]
    fn test_session_event_restored() {
        let event = SessionEvent::Restored {
            messages: vec![Message::user("hi")],
            documents_ready: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: SessionEvent = serde_json::from_str(&json).unwrap();
        if let SessionEvent::Restored {
            messages,
            documents_ready,
        } = deserialized
        {
            assert_eq!(messages.len(), 1);
            assert!(documents_ready);
        } else {
            panic!("Wrong variant");
        }
    }

    // ─── Snapshot Tests ──────────────────────────────────────

    #[test]
    fn test_snapshot_default_is_empty() {
        let snapshot = SessionSnapshot::default();
        assert!(snapshot.messages.is_empty());
        assert!(!snapshot.documents_ready);
    }

    #[test]
    fn test_snapshot_serialization_roundtrip() {
        let snapshot = SessionSnapshot {
            messages: vec![Message::user("q"), Message::bot("a")],
            documents_ready: true,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, snapshot);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.backend.endpoint, ApiEndpoint::Local);
        assert!(config.backend.api_base.is_none());
        assert_eq!(config.backend.ingest_route, IngestRoute::Batch);
        assert_eq!(config.storage.backend, StorageBackendType::Auto);
    }

    #[test]
    fn test_endpoint_base_urls() {
        assert_eq!(
            ApiEndpoint::Local.default_base_url(),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            ApiEndpoint::Deployed.default_base_url(),
            "https://multi-pdf-ai-chatbot-3.onrender.com"
        );
        assert!(ApiEndpoint::Custom.default_base_url().is_empty());
    }

    #[test]
    fn test_endpoint_labels() {
        assert_eq!(ApiEndpoint::Local.label(), "Local");
        assert_eq!(ApiEndpoint::Deployed.label(), "Deployed");
        assert_eq!(ApiEndpoint::Custom.label(), "Custom");
    }

    #[test]
    fn test_endpoint_all() {
        let all = ApiEndpoint::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&ApiEndpoint::Local));
        assert!(all.contains(&ApiEndpoint::Deployed));
    }

    #[test]
    fn test_base_url_override() {
        let config = BackendConfig {
            endpoint: ApiEndpoint::Custom,
            api_base: Some("https://example.test".to_string()),
            ingest_route: IngestRoute::Batch,
        };
        assert_eq!(config.base_url(), "https://example.test");
    }

    #[test]
    fn test_base_url_falls_back_to_endpoint_default() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = ChatConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ChatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.backend.endpoint, ApiEndpoint::Local);
        assert_eq!(deserialized.storage.backend, StorageBackendType::Auto);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Ingestion("HTTP 500".to_string());
        assert_eq!(err.to_string(), "Ingestion error: HTTP 500");

        let err = ChatError::Query("timed out".to_string());
        assert_eq!(err.to_string(), "Query error: timed out");

        let err = ChatError::GateBlocked;
        assert_eq!(err.to_string(), "No documents have been ingested yet");

        let err = ChatError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone() {
        let err = ChatError::Query("transient".to_string());
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
