use async_trait::async_trait;
use log::debug;

use sharesapp_core::shares::{NewShare, Share, ShareId, ShareRepositoryTrait};
use sharesapp_core::Result;

use crate::errors::StorageError;
use crate::store::MemoryStore;

/// Repository for managing share rows
pub struct ShareRepository {
    store: MemoryStore,
}

impl ShareRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShareRepositoryTrait for ShareRepository {
    fn find_by_id(&self, share_id: ShareId) -> Result<Option<Share>> {
        let tables = self.store.read()?;
        Ok(tables.shares.get(&share_id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Share>> {
        let tables = self.store.read()?;
        Ok(tables.shares.values().cloned().collect())
    }

    async fn insert(&self, new_share: NewShare) -> Result<Share> {
        let mut tables = self.store.write()?;
        let mut share = new_share.into_share(0);
        tables.check_share(&share)?;
        share.id = tables.next_share_id();
        tables.shares.insert(share.id, share.clone());
        debug!("Inserted share {}", share.id);
        Ok(share)
    }

    async fn insert_many(&self, new_shares: Vec<NewShare>) -> Result<Vec<Share>> {
        let mut tables = self.store.write()?;
        let drafts: Vec<Share> = new_shares.into_iter().map(|s| s.into_share(0)).collect();
        // All rows are checked before any is written.
        for draft in &drafts {
            tables.check_share(draft)?;
        }
        let mut shares = Vec::with_capacity(drafts.len());
        for mut share in drafts {
            share.id = tables.next_share_id();
            tables.shares.insert(share.id, share.clone());
            shares.push(share);
        }
        debug!("Inserted {} shares", shares.len());
        Ok(shares)
    }

    async fn save(&self, share: Share) -> Result<Share> {
        let mut tables = self.store.write()?;
        if !tables.shares.contains_key(&share.id) {
            return Err(StorageError::RowNotFound(format!("share {}", share.id)).into());
        }
        tables.check_share(&share)?;
        tables.shares.insert(share.id, share.clone());
        Ok(share)
    }

    async fn delete_by_id(&self, share_id: ShareId) -> Result<()> {
        let mut tables = self.store.write()?;
        tables.ensure_share_unreferenced(share_id)?;
        tables.shares.remove(&share_id);
        debug!("Deleted share {}", share_id);
        Ok(())
    }
}
