//! Parameter bag: where decoded values are stored
//!
//! The decoder never owns a bag. Callers hand in anything implementing
//! [`ParamBag`], which lets the same bag collect several parameters across
//! decode calls.

use crate::value::{ParamMap, ParamValue};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Storage capabilities the decoder needs from a bag
pub trait ParamBag {
    /// Get the value stored under a name
    fn get(&self, name: &str) -> Option<&ParamValue>;

    /// Store a value, replacing anything held under the name
    fn set(&mut self, name: &str, value: ParamValue);

    /// Append an item to the list stored under a name
    ///
    /// Starts a new list when the name is absent or holds something other
    /// than a list. The default implementation copies the list on every
    /// call; bags that can mutate in place should override it.
    fn add(&mut self, name: &str, item: String) {
        let items = match self.get(name) {
            Some(ParamValue::List(items)) => {
                let mut items = items.clone();
                items.push(item);
                items
            }
            _ => vec![item],
        };
        self.set(name, ParamValue::List(items));
    }

    /// Insert object entries into the map stored under a name
    ///
    /// Starts a new map when the name is absent or holds something other
    /// than a map. Later entries overwrite earlier ones with the same key.
    /// The default implementation copies the map on every call; bags that
    /// can mutate in place should override it.
    fn merge(&mut self, name: &str, entries: Vec<(String, String)>) {
        let mut map = match self.get(name) {
            Some(ParamValue::Map(existing)) => existing.clone(),
            _ => ParamMap::new(),
        };
        map.extend(entries);
        self.set(name, ParamValue::Map(map));
    }
}

impl<S: BuildHasher> ParamBag for HashMap<String, ParamValue, S> {
    fn get(&self, name: &str) -> Option<&ParamValue> {
        HashMap::get(self, name)
    }

    fn set(&mut self, name: &str, value: ParamValue) {
        self.insert(name.to_string(), value);
    }

    fn add(&mut self, name: &str, item: String) {
        match self.get_mut(name) {
            Some(ParamValue::List(items)) => items.push(item),
            _ => {
                self.insert(name.to_string(), ParamValue::List(vec![item]));
            }
        }
    }

    fn merge(&mut self, name: &str, entries: Vec<(String, String)>) {
        match self.get_mut(name) {
            Some(ParamValue::Map(map)) => map.extend(entries),
            _ => {
                self.insert(name.to_string(), ParamValue::Map(entries.into_iter().collect()));
            }
        }
    }
}

/// Default in-memory bag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Params {
    entries: HashMap<String, ParamValue>,
}

impl Params {
    /// Create an empty bag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parameters held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bag holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a parameter is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a parameter and return its value
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.entries.remove(name)
    }

    /// Iterate over names and values in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Parameter names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Consume the bag and return the underlying map
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, ParamValue> {
        self.entries
    }
}

impl ParamBag for Params {
    fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    fn set(&mut self, name: &str, value: ParamValue) {
        self.entries.set(name, value);
    }

    fn add(&mut self, name: &str, item: String) {
        self.entries.add(name, item);
    }

    fn merge(&mut self, name: &str, entries: Vec<(String, String)>) {
        self.entries.merge(name, entries);
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<HashMap<String, ParamValue>> for Params {
    fn from(entries: HashMap<String, ParamValue>) -> Self {
        Self { entries }
    }
}
