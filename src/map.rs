//! Ordered field map for records.
//!
//! [`FieldMap`] is a thin wrapper around [`IndexMap`] holding the `name: value`
//! pairs of one record while it is being parsed. Inserting a name that is
//! already present replaces the earlier value, so the last occurrence of a
//! duplicated field wins.
//!
//! ```rust
//! use schedule_ron::{FieldMap, Value};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("time".to_string(), Value::from("9:00"));
//! fields.insert("time".to_string(), Value::from("10:30"));
//!
//! assert_eq!(fields.len(), 1);
//! assert_eq!(fields.get("time").and_then(Value::as_str), Some("10:30"));
//! ```

use crate::Value;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(IndexMap<String, Value>);

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Inserts a field, returning the value it replaced.
    pub fn insert(&mut self, name: String, value: Value) -> Option<Value> {
        self.0.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Removes a field and hands its value out by move.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in first-insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}
