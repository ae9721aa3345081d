//! Pluggable key-value storage for lookup results.

use std::collections::HashMap;
use std::hash::Hash;

/// Minimal key-value store the crate's services write results to.
///
/// Implement it for a file, a database or a remote cache; the services
/// only ever call these three methods.
pub trait ResultsStorage<K, V> {
    /// Stored value for `key`, if any.
    fn get(&self, key: &K) -> Option<V>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: K, value: V);

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &K);
}

/// A plain `HashMap` behind [`ResultsStorage`].
///
/// No eviction, no expiry, nothing survives the process. Not synchronized:
/// wrap it in a `Mutex` to share it between threads.
#[derive(Debug, Clone)]
pub struct InMemoryStorage<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> InMemoryStorage<K, V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> InMemoryStorage<K, V> {
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }
}

impl<K, V> Default for InMemoryStorage<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: Clone> ResultsStorage<K, V> for InMemoryStorage<K, V> {
    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    fn delete(&mut self, key: &K) {
        self.entries.remove(key);
    }
}
