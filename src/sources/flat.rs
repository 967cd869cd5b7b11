//! Flattened path/value maps.

use crate::core::path;
use std::collections::HashMap;

/// An ordered map from colon-delimited paths to scalar values.
///
/// Entries keep insertion order; lookups ignore case. Inserting a path that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct FlatValues {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatValues {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value at `path`.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        let path = path.into();
        let value = value.into();
        let normalized = path::normalize(&path);
        match self.index.get(&normalized) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(normalized, self.entries.len());
                self.entries.push((path, value));
            }
        }
    }

    /// Value at `path` (case-insensitive).
    pub fn get(&self, path: &str) -> Option<&str> {
        self.index
            .get(&path::normalize(path))
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten a nested table produced by the `config` crate.
    ///
    /// Tables contribute their keys as path segments and arrays contribute
    /// item indexes (`Hosts:0`, `Hosts:1`). `nil` becomes an empty value.
    pub fn from_table(table: &config::Map<String, config::Value>) -> Self {
        let mut values = Self::new();
        for (key, value) in table {
            values.flatten_value(key.clone(), value);
        }
        values
    }

    fn flatten_value(&mut self, prefix: String, value: &config::Value) {
        use config::ValueKind;

        match &value.kind {
            ValueKind::Table(table) => {
                for (key, child) in table {
                    self.flatten_value(path::combine(Some(&prefix), key), child);
                }
            }
            ValueKind::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.flatten_value(path::combine(Some(&prefix), &index.to_string()), item);
                }
            }
            ValueKind::Nil => self.insert(prefix, ""),
            ValueKind::Boolean(b) => self.insert(prefix, b.to_string()),
            ValueKind::I64(n) => self.insert(prefix, n.to_string()),
            ValueKind::I128(n) => self.insert(prefix, n.to_string()),
            ValueKind::U64(n) => self.insert(prefix, n.to_string()),
            ValueKind::U128(n) => self.insert(prefix, n.to_string()),
            ValueKind::Float(n) => self.insert(prefix, n.to_string()),
            ValueKind::String(s) => self.insert(prefix, s.as_str()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FlatValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (path, value) in iter {
            values.insert(path, value);
        }
        values
    }
}
