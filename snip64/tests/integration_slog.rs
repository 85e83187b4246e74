//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `into_snipped_json()` carries the snipped form, not the original payload
//! - The `slog::Value` implementation emits nested JSON through `emit_serde`
//! - Custom thresholds are honoured by `into_snipped_json_with()`

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use snip64::{slog::IntoSnippedJson, Redactor, SnipConfig, Snippable};

// "ABCDEFGHIJKL", 12 bytes.
const PAYLOAD: &str = "QUJDREVGR0hJSktM";
const SNIPPED: &str = "[base64 payload ~12 bytes | preview: QUJD... ]";

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Other,
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }

    fn capture(&self, key: slog::Key, value: CapturedValue) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), value);
        Ok(())
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.capture(key, CapturedValue::Str(val.to_string()))
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.capture(key, CapturedValue::Str(val.into()))
    }

    fn emit_bool(&mut self, key: slog::Key, _val: bool) -> slog::Result {
        self.capture(key, CapturedValue::Other)
    }

    fn emit_u64(&mut self, key: slog::Key, _val: u64) -> slog::Result {
        self.capture(key, CapturedValue::Other)
    }

    fn emit_i64(&mut self, key: slog::Key, _val: i64) -> slog::Result {
        self.capture(key, CapturedValue::Other)
    }

    fn emit_f64(&mut self, key: slog::Key, _val: f64) -> slog::Result {
        self.capture(key, CapturedValue::Other)
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.capture(key, CapturedValue::Serde(json))
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

fn captured_json<V: slog::Value>(value: &V, key: &'static str) -> JsonValue {
    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(value, key, &mut serializer);
    match serializer.get(key) {
        Some(CapturedValue::Serde(json)) => json,
        other => panic!("expected a serde value for {key:?}, got {other:?}"),
    }
}

#[derive(Snippable, Serialize)]
struct Upload {
    file_name: String,
    body: String,
    size: u64,
}

#[test]
fn test_into_snipped_json_with_custom_thresholds() {
    let upload = Upload {
        file_name: "logo.png".into(),
        body: PAYLOAD.into(),
        size: 12,
    };

    let snipped = upload.into_snipped_json_with(&Redactor::new(SnipConfig::new(8, 4)));

    assert_eq!(
        captured_json(&snipped, "upload"),
        json!({"file_name": "logo.png", "body": SNIPPED, "size": 12})
    );
}

#[test]
fn test_into_snipped_json_uses_default_thresholds() {
    let long = PAYLOAD.repeat(20);
    let upload = Upload {
        file_name: "logo.png".into(),
        body: long.clone(),
        size: 240,
    };

    let snipped = upload.into_snipped_json();

    let body = snipped.as_json()["body"].as_str().unwrap().to_string();
    assert_eq!(
        body,
        format!("[base64 payload ~240 bytes | preview: {}... ]", &long[..100])
    );
    assert_eq!(captured_json(&snipped, "upload")["body"], body.as_str());
}

#[test]
fn test_nested_json_values_are_snipped() {
    #[derive(Snippable, Serialize)]
    struct Request {
        id: u32,
        attachments: Vec<Upload>,
        metadata: JsonValue,
    }

    let request = Request {
        id: 9,
        attachments: vec![Upload {
            file_name: "a.bin".into(),
            body: PAYLOAD.into(),
            size: 12,
        }],
        metadata: json!({"thumbnail": PAYLOAD, "tags": ["x", PAYLOAD]}),
    };

    let snipped = request.into_snipped_json_with(&Redactor::new(SnipConfig::new(8, 4)));
    let json = captured_json(&snipped, "request");

    assert_eq!(json["id"], 9);
    assert_eq!(json["attachments"][0]["body"], SNIPPED);
    assert_eq!(json["metadata"]["thumbnail"], SNIPPED);
    assert_eq!(json["metadata"]["tags"], json!(["x", SNIPPED]));
}

#[test]
fn test_plain_string_is_emitted_as_json_string() {
    let snipped = PAYLOAD
        .to_string()
        .into_snipped_json_with(&Redactor::new(SnipConfig::new(8, 4)));
    assert_eq!(captured_json(&snipped, "body"), JsonValue::String(SNIPPED.into()));
}

#[test]
fn test_logged_fields_keep_declared_order() {
    let upload = Upload {
        file_name: "logo.png".into(),
        body: PAYLOAD.into(),
        size: 12,
    };

    let snipped = upload.into_snipped_json_with(&Redactor::new(SnipConfig::new(8, 4)));
    let json = captured_json(&snipped, "upload");

    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["file_name", "body", "size"]);
}
