//! Cache Store Module
//!
//! Generic TTL cache with lazy expiry. Expired entries are removed on read;
//! there is no background sweep and no size bound.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// Key-value store with per-entry expiry.
///
/// One instance is created per logical namespace (universe ids, game details,
/// votes, thumbnails, composed records), so each namespace keeps its own
/// value type.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// TTL in seconds for entries without explicit TTL
    default_ttl: u64,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates a new TtlCache with the given default TTL.
    ///
    /// # Arguments
    /// * `default_ttl` - Default TTL in seconds for entries set without one
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten and the TTL is
    /// reset. There are no error conditions.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: V, ttl: Option<u64>) {
        let effective_ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, effective_ttl);
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired. An expired entry behaves
    /// exactly like an absent one and is removed as a side effect.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    // == Has ==
    /// Checks whether a fresh entry exists for the key.
    ///
    /// Applies the same freshness check as `get`, evicting stale entries.
    pub fn has(&mut self, key: &str) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key, regardless of freshness.
    ///
    /// Returns whether an entry existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Returns the currently-unexpired keys and their count.
    ///
    /// Stale entries encountered during the scan are evicted.
    pub fn stats(&mut self) -> CacheStats {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort();

        CacheStats {
            size: keys.len(),
            keys,
        }
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
