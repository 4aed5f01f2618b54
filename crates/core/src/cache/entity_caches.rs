use std::sync::Arc;

use super::bounded_cache::BoundedCache;
use crate::companies::{Company, CompanyId};
use crate::config::CacheConfig;
use crate::shares::{Share, ShareId};
use crate::users::{User, UserId};

pub type CompanyCache = BoundedCache<CompanyId, Company>;
pub type ShareCache = BoundedCache<ShareId, Share>;
pub type UserCache = BoundedCache<UserId, User>;

/// One cache per entity type, handed to every service at construction.
///
/// Services own the cache of their own type and only ever `remove` entries
/// from the other two when they persist a related row.
#[derive(Debug, Clone)]
pub struct EntityCaches {
    pub companies: Arc<CompanyCache>,
    pub shares: Arc<ShareCache>,
    pub users: Arc<UserCache>,
}

impl EntityCaches {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            companies: Arc::new(BoundedCache::from_config(config)),
            shares: Arc::new(BoundedCache::from_config(config)),
            users: Arc::new(BoundedCache::from_config(config)),
        }
    }
}

impl Default for EntityCaches {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
