//! Submitted form data as seen by the validator.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Name → value lookup over a submission. Multi-valued fields are not
/// modelled; implementations pick one value per name.
pub trait FormSource {
    fn field_names(&self) -> Vec<&str>;

    fn value(&self, name: &str) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.field_names().is_empty()
    }
}

impl FormSource for HashMap<String, String> {
    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl FormSource for BTreeMap<String, String> {
    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

/// Ordered name/value pairs as they arrived on the wire. For repeated names
/// the last value wins.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
    /// Name to index of its last pair.
    last: HashMap<String, usize>,
}

impl PartialEq for FormData {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for FormData {}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &str) -> Self {
        url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.last.insert(name.clone(), self.pairs.len());
        self.pairs.push((name, value.into()));
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(String, String)> for FormData {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut form = Self::new();
        for (name, value) in iter {
            form.insert(name, value);
        }
        form
    }
}

impl FormSource for FormData {
    fn field_names(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.last.len());
        self.pairs
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.last
            .get(name)
            .and_then(|&index| self.pairs.get(index))
            .map(|(_, v)| v.as_str())
    }

    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
