//! Inherited key/value pairs
//!
//! A [`KeyValues`] set is attached to every sink snapshot. Merging never
//! touches the set it was called on: it copies the map, applies the new
//! pairs and re-renders the cached `"key: value, "` text, so sibling
//! snapshots derived from one parent cannot observe each other's values.
//!
//! Entries keep the position of their first insertion. Re-setting a key
//! replaces its value in place.

use super::value::{push_rendered, Value, EMPTY_PLACEHOLDER};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub(crate) const PAIR_SEPARATORS: [&str; 2] = [": ", ", "];

#[derive(Clone)]
pub struct KeyValues {
    map: Arc<IndexMap<String, Value>>,
    rendered: Arc<str>,
}

impl KeyValues {
    pub fn new() -> Self {
        Self {
            map: Arc::new(IndexMap::new()),
            rendered: Arc::from(""),
        }
    }

    /// Return a new set with `pairs` applied on top of this one
    ///
    /// `pairs` alternates key, value. An odd trailing key is given the
    /// empty placeholder as its value. Keys are the rendered form of their
    /// value; an empty key or an empty string value is stored as `""`.
    /// An empty `pairs` shares the existing map and rendering.
    #[must_use]
    pub fn merge(&self, pairs: &[Value]) -> KeyValues {
        if pairs.is_empty() {
            return self.clone();
        }

        let mut map = (*self.map).clone();
        for chunk in pairs.chunks(2) {
            let mut key = String::new();
            push_rendered(&mut key, &chunk[0]);

            let value = match chunk.get(1) {
                Some(Value::Str(s)) if s.is_empty() => placeholder(),
                Some(value) => value.clone(),
                None => placeholder(),
            };
            map.insert(key, value);
        }

        let rendered = render(&map);
        Self {
            map: Arc::new(map),
            rendered: Arc::from(rendered),
        }
    }

    /// The cached `"key: value, "` rendering, empty when there are no pairs
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[cfg(test)]
    pub(crate) fn shares_storage_with(&self, other: &KeyValues) -> bool {
        Arc::ptr_eq(&self.map, &other.map) && Arc::ptr_eq(&self.rendered, &other.rendered)
    }
}

fn placeholder() -> Value {
    Value::Str(EMPTY_PLACEHOLDER.to_string())
}

fn render(map: &IndexMap<String, Value>) -> String {
    let mut out = String::with_capacity(map.len() * 16);
    for (key, value) in map {
        out.push_str(key);
        out.push_str(PAIR_SEPARATORS[0]);
        push_rendered(&mut out, value);
        out.push_str(PAIR_SEPARATORS[1]);
    }
    out
}

impl Default for KeyValues {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeyValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
