//! Ordered keyed collection for [`Value::Map`](super::Value::Map).

use std::{collections::HashMap, fmt, slice, vec};

use super::Value;

/// String-keyed entries kept in insertion order.
///
/// Keys are unique. Inserting an existing key replaces its value in place,
/// so the key keeps its original position. A key-to-position index keeps
/// lookups and inserts constant time on average.
#[derive(Default)]
pub struct Map {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl Map {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `key`, returning the previous value if present.
    pub fn insert<K>(&mut self, key: K, value: Value) -> Option<Value>
    where
        K: Into<String>,
    {
        let key = key.into();
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let &position = self.index.get(key)?;
        self.entries.get(position).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let &position = self.index.get(key)?;
        self.entries.get_mut(position).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> slice::Iter<'_, (String, Value)> {
        self.entries.iter()
    }

    /// Rebuilds the map with every value passed through `f`.
    ///
    /// Keys and their order are untouched, so uniqueness does not need to be
    /// checked again.
    pub(crate) fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(Value) -> Value,
    {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, f(value)))
                .collect(),
            index: self.index,
        }
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, value)| (key, value)))
            .finish()
    }
}

/// Maps are equal when they hold the same entries in the same order.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K> FromIterator<(K, Value)> for Map
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K> Extend<(K, Value)> for Map
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a (String, Value);
    type IntoIter = slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
