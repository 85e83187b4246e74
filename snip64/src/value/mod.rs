//! Dynamic value model for data whose shape is only known at runtime.
//!
//! [`Value`] is a closed set of shapes: scalars, text, ordered lists, ordered
//! keyed maps, and host objects that expose their own capabilities through
//! [`Convertible`]. The redactor dispatches with a single `match` over it.

mod convertible;
mod map;

use std::fmt;

#[cfg(feature = "serde")]
pub use convertible::Serialized;
pub use convertible::{Convertible, Rendered};
pub use map::Map;

/// A structured value that can be snipped.
///
/// Values are consumed by [`crate::Redactor::snip`] and rebuilt, so snipping
/// never mutates the input in place.
#[derive(Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(Map),
    /// A host object; see [`Convertible`] for how it is treated.
    Object(Box<dyn Convertible>),
}

impl Value {
    /// Wraps a host object that implements [`Convertible`].
    pub fn object<T>(object: T) -> Self
    where
        T: Convertible + 'static,
    {
        Self::Object(Box::new(object))
    }

    /// Wraps a value that is only available through its `Display` output.
    pub fn rendered<T>(object: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::object(Rendered(object))
    }

    /// Wraps a value whose canonical form is its serde serialization.
    #[cfg(feature = "serde")]
    pub fn serialized<T>(object: T) -> Self
    where
        T: serde::Serialize + fmt::Debug + Send + Sync + 'static,
    {
        Self::object(Serialized(object))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Nesting depth of lists and maps. Scalars, text and objects count as zero.
    ///
    /// Walks with an explicit stack, so arbitrarily deep values cannot
    /// overflow the call stack.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0_usize)];
        while let Some((value, level)) = pending.pop() {
            match value {
                Self::List(items) => {
                    deepest = deepest.max(level + 1);
                    pending.extend(items.iter().map(|item| (item, level + 1)));
                }
                Self::Map(map) => {
                    deepest = deepest.max(level + 1);
                    pending.extend(map.values().map(|item| (item, level + 1)));
                }
                _ => {}
            }
        }
        deepest
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Unsigned(value) => f.debug_tuple("Unsigned").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(object).finish(),
        }
    }
}

/// Structural equality. Two objects are equal only if they are the same allocation.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Unsigned(a), Self::Unsigned(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => {
                std::ptr::addr_eq::<dyn Convertible, dyn Convertible>(&**a, &**b)
            }
            _ => false,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Map(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}
