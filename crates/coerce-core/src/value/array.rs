//! Insertion-ordered key-value container

use std::collections::HashMap;
use std::fmt;

use super::Value;

/// Array key: an integer index or a name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(i64::from(index))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// Ordered key-value container
///
/// Keys are unique. Inserting an existing key replaces its value
/// without moving it; new keys are appended. Equality is
/// order-sensitive.
#[derive(Clone, Default)]
pub struct Array {
    entries: Vec<(Key, Value)>,
    // key -> position in `entries`
    positions: HashMap<Key, usize>,
    largest_index: Option<i64>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            largest_index: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace; returns the previous value for `key`, if any
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if let Some(&position) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.append(key, value);
        None
    }

    /// Append under the next free integer index and return that key
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let key = Key::Index(self.next_index());
        if let Some(&position) = self.positions.get(&key) {
            // only reachable once the index space is exhausted
            self.entries[position].1 = value.into();
        } else {
            self.append(key.clone(), value.into());
        }
        key
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.positions
            .get(&key.into())
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.positions.contains_key(&key.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// True when keys are exactly `0, 1, 2, ...` in order
    pub fn is_list(&self) -> bool {
        self.keys()
            .zip(0_i64..)
            .all(|(key, expected)| *key == Key::Index(expected))
    }

    // One past the largest integer key, or 0 when there is none.
    fn next_index(&self) -> i64 {
        self.largest_index.map_or(0, |max| max.saturating_add(1))
    }

    fn append(&mut self, key: Key, value: Value) {
        if let Key::Index(index) = &key {
            self.largest_index = Some(self.largest_index.map_or(*index, |max| max.max(*index)));
        }
        self.positions.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut array = Array::new();
        array.extend(iter);
        array
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = Array::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl Extend<(Key, Value)> for Array {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().map(Into::into).collect()
    }
}

impl IntoIterator for Array {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
