//! Cache module - bounded per-entity-type caches sitting in front of the store.

mod bounded_cache;
mod cache_traits;
mod entity_caches;

#[cfg(test)]
mod bounded_cache_tests;

pub use bounded_cache::BoundedCache;
pub use cache_traits::GenericCache;
pub use entity_caches::{CompanyCache, EntityCaches, ShareCache, UserCache};
