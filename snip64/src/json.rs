//! `serde_json` interop.
//!
//! This module connects the dynamic [`Value`] model with `serde_json`:
//! - conversions in both directions,
//! - a `Serialize` impl so snipped values can be emitted directly,
//! - snipping of `serde_json::Value` trees and of any `Serialize` type.
//!
//! `serde_json` is built with `preserve_order`, so objects keep the order in
//! which their fields were serialized. Snipping itself never reorders entries.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::{
    redactor::Redactor,
    snippable::Snippable,
    value::{Map, Value},
};

/// Returned by [`Redactor::snip_serialize`] when the input cannot be serialized.
pub const SERIALIZE_FAILURE_PLACEHOLDER: &str = "Failed to serialize value";

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(value) => Self::Bool(value),
            JsonValue::Number(number) => from_number(&number),
            JsonValue::String(text) => Self::Text(text),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

fn from_number(number: &Number) -> Value {
    if let Some(value) = number.as_i64() {
        Value::Integer(value)
    } else if let Some(value) = number.as_u64() {
        Value::Unsigned(value)
    } else {
        number.as_f64().map_or(Value::Null, Value::Float)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Integer(value) => Self::Number(value.into()),
            Value::Unsigned(value) => Self::Number(value.into()),
            // Non-finite floats have no JSON form.
            Value::Float(value) => Number::from_f64(value).map_or(Self::Null, Self::Number),
            Value::Text(text) => Self::String(text),
            Value::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Map(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect::<JsonMap<String, JsonValue>>(),
            ),
            Value::Object(object) => {
                if let Some(canonical) = object.to_canonical() {
                    Self::from(canonical)
                } else {
                    object.render_text().map_or(Self::Null, Self::String)
                }
            }
        }
    }
}

/// Objects serialize through their canonical form, then their text, then as `null`.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Unsigned(value) => serializer.serialize_u64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(text) => serializer.serialize_str(text),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => map.serialize(serializer),
            Self::Object(object) => {
                if let Some(canonical) = object.to_canonical() {
                    canonical.serialize(serializer)
                } else if let Some(text) = object.render_text() {
                    serializer.serialize_str(&text)
                } else {
                    serializer.serialize_unit()
                }
            }
        }
    }
}

impl Serialize for Map {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut entries = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            entries.serialize_entry(key, value)?;
        }
        entries.end()
    }
}

impl Redactor {
    /// Snips every string in a `serde_json::Value` tree.
    ///
    /// Object keys are never touched. Arrays and objects nested deeper than
    /// the configured maximum depth are returned unchanged.
    #[must_use]
    pub fn snip_json(&self, value: JsonValue) -> JsonValue {
        self.snip_json_at(value, 0)
    }

    fn snip_json_at(&self, value: JsonValue, depth: usize) -> JsonValue {
        match value {
            JsonValue::String(text) => JsonValue::String(self.snip_string(text)),
            JsonValue::Array(items) if depth < self.config().max_depth() => JsonValue::Array(
                items
                    .into_iter()
                    .map(|item| self.snip_json_at(item, depth + 1))
                    .collect(),
            ),
            JsonValue::Object(entries) if depth < self.config().max_depth() => JsonValue::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, self.snip_json_at(item, depth + 1)))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Serializes `value` to JSON and snips the result.
    ///
    /// This never fails: if serialization fails the result is the string
    /// [`SERIALIZE_FAILURE_PLACEHOLDER`].
    pub fn snip_serialize<T>(&self, value: &T) -> JsonValue
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value).map_or_else(
            |_| JsonValue::String(SERIALIZE_FAILURE_PLACEHOLDER.to_string()),
            |json| self.snip_json(json),
        )
    }
}

impl Snippable for JsonValue {
    fn snip_with(self, redactor: &Redactor) -> Self {
        redactor.snip_json(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{json, Value as JsonValue};

    use super::SERIALIZE_FAILURE_PLACEHOLDER;
    use crate::{Map, Redactor, SnipConfig, Snippable, Value};

    // "ABCDEFGHIJKL", 12 bytes.
    const PAYLOAD: &str = "QUJDREVGR0hJSktM";
    const SNIPPED: &str = "[base64 payload ~12 bytes | preview: QUJD... ]";

    fn redactor() -> Redactor {
        Redactor::new(SnipConfig::new(8, 4))
    }

    #[test]
    fn json_round_trips_through_value() {
        let json = json!({"a": [1, -2, 3.5, true, null], "b": "text"});
        let value = Value::from(json.clone());
        assert_eq!(value.get("b"), Some(&Value::from("text")));
        assert_eq!(JsonValue::from(value), json);
    }

    #[test]
    fn large_unsigned_is_kept() {
        let value = Value::from(json!(u64::MAX));
        assert_eq!(value, Value::Unsigned(u64::MAX));
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(JsonValue::from(Value::Float(f64::NAN)), JsonValue::Null);
    }

    #[test]
    fn snip_json_rewrites_strings_only() {
        let snipped = redactor().snip_json(json!({
            "attachment": PAYLOAD,
            "count": 42,
            "nested": [{"inner": PAYLOAD}],
        }));
        assert_eq!(
            snipped,
            json!({
                "attachment": SNIPPED,
                "count": 42,
                "nested": [{"inner": SNIPPED}],
            })
        );
    }

    #[test]
    fn json_keys_are_never_snipped() {
        let mut object = serde_json::Map::new();
        object.insert(PAYLOAD.to_string(), json!(PAYLOAD));
        let snipped = JsonValue::Object(object).snip_with(&redactor());
        assert_eq!(snipped[PAYLOAD], json!(SNIPPED));
    }

    #[test]
    fn snip_serialize_handles_any_serializable_type() {
        let mut map = HashMap::new();
        map.insert("body", PAYLOAD);
        assert_eq!(redactor().snip_serialize(&map), json!({"body": SNIPPED}));
    }

    #[test]
    fn snip_serialize_reports_failure_as_string() {
        // Non-string map keys cannot be represented as JSON object keys.
        let mut map = HashMap::new();
        map.insert(vec![1_u8], "value");
        assert_eq!(
            redactor().snip_serialize(&map),
            JsonValue::String(SERIALIZE_FAILURE_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn value_serializes_in_map_order() {
        let mut map = Map::new();
        map.insert("z", Value::from(1_i32));
        map.insert("a", Value::rendered(7));
        let text = serde_json::to_string(&Value::Map(map)).unwrap();
        assert_eq!(text, r#"{"z":1,"a":"7"}"#);
    }

    #[test]
    fn serialized_object_is_snipped_as_canonical_data() {
        #[derive(Debug, serde::Serialize)]
        struct Upload {
            name: &'static str,
            body: &'static str,
        }

        let snipped = redactor().snip(Value::serialized(Upload {
            name: "logo.png",
            body: PAYLOAD,
        }));
        assert_eq!(snipped.get("name"), Some(&Value::from("logo.png")));
        assert_eq!(snipped.get("body"), Some(&Value::from(SNIPPED)));
    }

    #[derive(Debug, serde::Serialize)]
    struct Unsorted {
        zeta: &'static str,
        alpha: &'static str,
        mid: &'static str,
    }

    const UNSORTED: Unsorted = Unsorted {
        zeta: "z",
        alpha: PAYLOAD,
        mid: "m",
    };

    #[test]
    fn serialized_object_keeps_declared_field_order() {
        let snipped = redactor().snip(Value::serialized(UNSORTED));
        let map = snipped.as_map().unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(map.get("alpha"), Some(&Value::from(SNIPPED)));
    }

    #[test]
    fn snip_serialize_keeps_declared_field_order() {
        let snipped = redactor().snip_serialize(&UNSORTED);
        let keys: Vec<_> = snipped.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&snipped).unwrap(),
            format!(r#"{{"zeta":"z","alpha":"{SNIPPED}","mid":"m"}}"#)
        );
    }
}
