//! Cache contract shared by every entity type.

use crate::errors::Result;

/// Key/value cache holding revocable copies of store rows.
///
/// Any entry may be dropped at any time; callers must be able to rebuild it
/// from the store.
pub trait GenericCache<K, V>: Send + Sync {
    /// Inserts or replaces an entry.
    fn put(&self, key: K, value: V);

    /// Returns a copy of the cached value, if present.
    fn get(&self, key: &K) -> Option<V>;

    /// Removes a single entry. No-op when absent.
    fn remove(&self, key: &K);

    /// Drops every entry.
    fn clear(&self);

    /// Returns the cached value, falling back to `fetch` on a miss.
    ///
    /// Does not write the fetched value back; callers decide when a
    /// resolution is successful enough to cache.
    fn get_or_fetch<F>(&self, key: &K, fetch: F) -> Result<Option<V>>
    where
        Self: Sized,
        F: FnOnce(&K) -> Result<Option<V>>,
    {
        match self.get(key) {
            Some(value) => Ok(Some(value)),
            None => fetch(key),
        }
    }
}
