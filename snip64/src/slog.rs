//! Adapters for emitting snipped values through `slog`.
//!
//! This module connects [`crate::Snippable`] with `slog` by providing a
//! `slog::Value` that serializes the snipped output as structured JSON via
//! `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the snipped one, not the original
//!   value with its full payloads.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or choose thresholds beyond the
//! [`Redactor`] it is handed.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{json::SERIALIZE_FAILURE_PLACEHOLDER, redactor::Redactor, snippable::Snippable};

/// A `slog::Value` that emits an owned snipped payload as structured JSON.
pub struct SnippedJson {
    value: JsonValue,
}

impl SnippedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON that will be logged.
    pub const fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for SnippedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their snipped form as JSON.
///
/// ## Example
/// ```ignore
/// use snip64::slog::IntoSnippedJson;
///
/// info!(logger, "upload received"; "request" => request.into_snipped_json());
/// ```
pub trait IntoSnippedJson: Snippable + Serialize {
    /// Snips `self` with [`Redactor::default`] and wraps the JSON result.
    fn into_snipped_json(self) -> SnippedJson {
        self.into_snipped_json_with(&Redactor::default())
    }

    /// Snips `self` with `redactor` and wraps the JSON result.
    ///
    /// If converting the snipped output into `serde_json::Value` fails, the
    /// returned value holds the string [`SERIALIZE_FAILURE_PLACEHOLDER`].
    fn into_snipped_json_with(self, redactor: &Redactor) -> SnippedJson {
        let snipped = self.snip_with(redactor);
        let json_value = serde_json::to_value(snipped)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILURE_PLACEHOLDER.to_string()));
        SnippedJson::new(json_value)
    }
}

impl<T> IntoSnippedJson for T where T: Snippable + Serialize {}
