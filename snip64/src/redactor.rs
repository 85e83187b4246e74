//! The snipping entrypoints.
//!
//! [`Redactor`] ties candidate analysis, placeholder formatting and
//! traversal together. It is `Copy`, holds only its configuration, and every
//! method is a pure function of that configuration and the input.

use std::borrow::Cow;

use crate::{
    candidate::{self, Candidate, Rejection},
    config::SnipConfig,
    placeholder,
    snippable::Snippable,
    value::Value,
};

/// Replaces base64-like strings with size-and-preview placeholders.
///
/// ```rust
/// use snip64::{Redactor, SnipConfig, Value};
///
/// let redactor = Redactor::new(SnipConfig::new(8, 4));
/// let snipped = redactor.snip(Value::from("QUJDREVGR0hJSktM"));
/// assert_eq!(
///     snipped,
///     Value::from("[base64 payload ~12 bytes | preview: QUJD... ]"),
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Redactor {
    config: SnipConfig,
}

impl Redactor {
    #[must_use]
    pub const fn new(config: SnipConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &SnipConfig {
        &self.config
    }

    /// Snips every string reachable from `value`.
    ///
    /// Lists and maps are rebuilt with the same keys in the same order.
    /// Objects are replaced by their snipped canonical form, or else by their
    /// snipped text, or else kept as they are. Scalars pass through. Lists,
    /// maps and object conversions nested deeper than
    /// [`SnipConfig::max_depth`] are returned unchanged.
    #[must_use]
    pub fn snip(&self, value: Value) -> Value {
        self.snip_at(value, 0)
    }

    fn snip_at(&self, value: Value, depth: usize) -> Value {
        match value {
            Value::Text(text) => Value::Text(self.snip_string(text)),
            Value::List(items) if depth < self.config.max_depth() => Value::List(
                items
                    .into_iter()
                    .map(|item| self.snip_at(item, depth + 1))
                    .collect(),
            ),
            Value::Map(map) if depth < self.config.max_depth() => {
                Value::Map(map.map_values(|item| self.snip_at(item, depth + 1)))
            }
            Value::Object(object) if depth < self.config.max_depth() => {
                if let Some(canonical) = object.to_canonical() {
                    self.snip_at(canonical, depth + 1)
                } else if let Some(text) = object.render_text() {
                    Value::Text(self.snip_string(text))
                } else {
                    Value::Object(object)
                }
            }
            other => other,
        }
    }

    /// Snips a borrowed string, borrowing it back when it is not a candidate.
    pub fn snip_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.analyse(text) {
            Ok(candidate) => Cow::Owned(self.placeholder(&candidate)),
            Err(_) => Cow::Borrowed(text),
        }
    }

    /// Snips an owned string, returning it untouched when it is not a candidate.
    #[must_use]
    pub fn snip_string(&self, text: String) -> String {
        match self.analyse(&text) {
            Ok(candidate) => self.placeholder(&candidate),
            Err(_) => text,
        }
    }

    /// Snips a typed value through its [`Snippable`] implementation.
    #[must_use]
    pub fn snip_typed<T>(&self, value: T) -> T
    where
        T: Snippable,
    {
        value.snip_with(self)
    }

    /// Runs candidate analysis on a single string.
    ///
    /// This is the diagnostic view of what [`Redactor::snip_text`] does: it
    /// reports why a string was rejected instead of silently passing it on.
    pub fn analyse(&self, text: &str) -> Result<Candidate, Rejection> {
        candidate::analyse(text, self.config.min_length())
    }

    /// Formats the placeholder for an accepted candidate.
    #[must_use]
    pub fn placeholder(&self, candidate: &Candidate) -> String {
        placeholder::build(candidate, self.config.preview_length())
    }
}

impl From<SnipConfig> for Redactor {
    fn from(config: SnipConfig) -> Self {
        Self::new(config)
    }
}
