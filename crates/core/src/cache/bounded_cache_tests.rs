//! Tests for the bounded cache and its flush-on-capacity policy.

#[cfg(test)]
mod tests {
    use crate::cache::{BoundedCache, EntityCaches, GenericCache};
    use crate::config::CacheConfig;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_put_and_get() {
        let cache: BoundedCache<i64, String> = BoundedCache::new(10);

        assert!(cache.get(&1).is_none());

        cache.put(1, "acme".to_string());
        assert_eq!(cache.get(&1), Some("acme".to_string()));

        cache.put(1, "globex".to_string());
        assert_eq!(cache.get(&1), Some("globex".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_after_remove_is_absent() {
        let cache: BoundedCache<i64, String> = BoundedCache::new(10);
        cache.put(1, "acme".to_string());
        cache.put(2, "globex".to_string());

        cache.remove(&1);

        assert!(cache.get(&1).is_none());
        assert_eq!(cache.get(&2), Some("globex".to_string()));

        // Removing a missing key is a no-op
        cache.remove(&42);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_drops_everything() {
        let cache: BoundedCache<i64, i64> = BoundedCache::new(10);
        for i in 0..5 {
            cache.put(i, i * 10);
        }

        cache.clear();

        assert!(cache.is_empty());
        for i in 0..5 {
            assert!(cache.get(&i).is_none());
        }
    }

    #[test]
    fn test_full_cache_is_flushed_before_insert() {
        let cache: BoundedCache<i64, i64> = BoundedCache::new(100);
        for i in 0..100 {
            cache.put(i, i);
        }
        assert_eq!(cache.len(), 100);

        cache.put(1000, 1000);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&1000), Some(1000));
        assert!(cache.get(&0).is_none());
        assert!(cache.get(&99).is_none());
    }

    #[test]
    fn test_replacing_a_key_in_a_full_cache_also_flushes() {
        let cache: BoundedCache<i64, i64> = BoundedCache::new(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);

        cache.put(2, 20);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&2), Some(20));
        assert!(!cache.contains_key(&1));
    }

    #[test]
    fn test_below_capacity_never_evicts() {
        let cache: BoundedCache<i64, i64> = BoundedCache::new(5);
        for i in 0..5 {
            cache.put(i, i);
        }
        for i in 0..5 {
            assert_eq!(cache.get(&i), Some(i));
        }
    }

    #[test]
    fn test_default_uses_configured_capacity() {
        let cache: BoundedCache<i64, i64> = BoundedCache::default();
        assert_eq!(cache.capacity(), 100);

        let caches = EntityCaches::new(&CacheConfig::with_capacity(7).unwrap());
        assert_eq!(caches.companies.capacity(), 7);
        assert_eq!(caches.shares.capacity(), 7);
        assert_eq!(caches.users.capacity(), 7);
    }

    #[test]
    fn test_concurrent_puts_respect_capacity() {
        let cache: Arc<BoundedCache<i64, i64>> = Arc::new(BoundedCache::new(16));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = t * 1000 + i;
                        cache.put(key, key);
                        assert!(cache.len() <= 16);
                        cache.get(&key);
                        if i % 7 == 0 {
                            cache.remove(&key);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 16);
    }
}
