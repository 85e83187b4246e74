//! Capabilities that host objects opt into.
//!
//! An object carried as [`Value::Object`] is inspected through two optional
//! capabilities:
//!
//! | Capability | Result of snipping |
//! |------------|--------------------|
//! | `to_canonical` returns `Some` | the snipped canonical value |
//! | only `render_text` returns `Some` | the snipped rendered text |
//! | neither | the object itself, unchanged |
//!
//! Canonical conversion always wins when both are available.

use std::fmt;

use super::Value;

/// A host object that may expose a canonical data form or a text form.
///
/// Both methods default to `None`, so an empty impl marks an opaque object
/// that passes through snipping untouched.
///
/// ```rust
/// use snip64::{Convertible, Map, Value};
///
/// #[derive(Debug)]
/// struct Attachment {
///     name: String,
///     body: String,
/// }
///
/// impl Convertible for Attachment {
///     fn to_canonical(&self) -> Option<Value> {
///         let mut map = Map::new();
///         map.insert("name", Value::from(self.name.as_str()));
///         map.insert("body", Value::from(self.body.as_str()));
///         Some(Value::Map(map))
///     }
/// }
/// ```
pub trait Convertible: fmt::Debug + Send + Sync {
    /// Converts the object into plain data.
    fn to_canonical(&self) -> Option<Value> {
        None
    }

    /// Renders the object as text.
    fn render_text(&self) -> Option<String> {
        None
    }
}

/// Exposes a `Display` type through the text capability only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered<T>(pub T);

impl<T> Convertible for Rendered<T>
where
    T: fmt::Display + fmt::Debug + Send + Sync,
{
    fn render_text(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Exposes a serde type through the canonical-data capability.
///
/// If serialization fails the object has no canonical form and, having no
/// text form either, passes through unchanged.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Serialized<T>(pub T);

#[cfg(feature = "serde")]
impl<T> Convertible for Serialized<T>
where
    T: serde::Serialize + fmt::Debug + Send + Sync,
{
    fn to_canonical(&self) -> Option<Value> {
        serde_json::to_value(&self.0).ok().map(Value::from)
    }
}
