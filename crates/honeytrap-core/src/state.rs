//! The entry collection owned by one field for one render/submit cycle.

use std::fmt;

use crate::digest::{compute_control_hash, HashScheme};
use crate::entry::Entry;

/// Default maximum age of a rendered trap.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Ordered, read-only view of the trap's entries plus the parameters needed
/// to arm and check it.
///
/// Entries are only written by the generator (fresh trap) and the validator
/// (parsed submission).
#[derive(Clone)]
pub struct TrapState {
    entries: Vec<Entry>,
    decoy_count: u8,
    secret: String,
    timeout_secs: u64,
    hash_scheme: HashScheme,
}

impl TrapState {
    pub(crate) fn new(
        secret: String,
        decoy_count: u8,
        timeout_secs: u64,
        hash_scheme: HashScheme,
    ) -> Self {
        Self {
            entries: Vec::new(),
            decoy_count,
            secret,
            timeout_secs,
            hash_scheme,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Every entry's value, in entry order.
    pub fn data(&self) -> Vec<Option<&str>> {
        self.entries.iter().map(|e| e.data.as_deref()).collect()
    }

    pub fn decoy_count(&self) -> u8 {
        self.decoy_count
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn hash_scheme(&self) -> HashScheme {
        self.hash_scheme
    }

    pub fn control_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_control())
    }

    pub fn decoy_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| !e.is_control())
    }

    /// Control digest over the current decoy names at `epoch`.
    ///
    /// Repeated decoy names count once: a browser posts a colliding pair as
    /// one field, so the digest must not depend on the collision.
    pub fn control_hash(&self, epoch: i64) -> String {
        let mut names: Vec<&str> = self.decoy_entries().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        compute_control_hash(self.hash_scheme, epoch, &self.secret, names)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

impl fmt::Debug for TrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrapState")
            .field("entries", &self.entries)
            .field("decoy_count", &self.decoy_count)
            .field("secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("hash_scheme", &self.hash_scheme)
            .finish()
    }
}

impl std::ops::Index<usize> for TrapState {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a TrapState {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
