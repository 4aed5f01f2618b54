use log::debug;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::cache_traits::GenericCache;
use crate::config::CacheConfig;

/// Size-bounded map with full-flush eviction.
///
/// When the map already holds `capacity` entries, the next `put` clears the
/// whole map before inserting, so the cache never exceeds its capacity and
/// holds exactly one entry right after a flush. Entries never expire by time.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    // Poisoning is ignored: every entry can be rebuilt from the store.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for BoundedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

impl<K, V> GenericCache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn put(&self, key: K, value: V) {
        let mut entries = self.write();
        if entries.len() >= self.capacity {
            debug!("Cache reached capacity {}, flushing", self.capacity);
            entries.clear();
        }
        entries.insert(key, value);
    }

    fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    fn remove(&self, key: &K) {
        self.write().remove(key);
    }

    fn clear(&self) {
        self.write().clear();
    }
}
