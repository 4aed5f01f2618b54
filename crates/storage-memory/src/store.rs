//! Shared table handle used by every repository.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use sharesapp_core::companies::{Company, CompanyId};
use sharesapp_core::shares::{Share, ShareId};
use sharesapp_core::users::{User, UserId};

use crate::errors::StorageError;

/// Rows of every entity type plus their id sequences.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) companies: BTreeMap<CompanyId, Company>,
    pub(crate) shares: BTreeMap<ShareId, Share>,
    pub(crate) users: BTreeMap<UserId, User>,
    company_seq: i64,
    share_seq: i64,
    user_seq: i64,
}

impl Tables {
    pub(crate) fn next_company_id(&mut self) -> CompanyId {
        self.company_seq += 1;
        self.company_seq
    }

    pub(crate) fn next_share_id(&mut self) -> ShareId {
        self.share_seq += 1;
        self.share_seq
    }

    pub(crate) fn next_user_id(&mut self) -> UserId {
        self.user_seq += 1;
        self.user_seq
    }

    /// Foreign keys of a share row: its company and its holders.
    pub(crate) fn check_share(&self, share: &Share) -> Result<(), StorageError> {
        match share.company_id {
            None => {
                return Err(StorageError::ForeignKeyViolation(format!(
                    "share {} has no company",
                    share.id
                )))
            }
            Some(company_id) if !self.companies.contains_key(&company_id) => {
                return Err(StorageError::ForeignKeyViolation(format!(
                    "share {} references missing company {}",
                    share.id, company_id
                )))
            }
            Some(_) => {}
        }
        if let Some(user_id) = share.user_ids.iter().find(|id| !self.users.contains_key(id)) {
            return Err(StorageError::ForeignKeyViolation(format!(
                "share {} references missing user {}",
                share.id, user_id
            )));
        }
        Ok(())
    }

    pub(crate) fn check_company(&self, company: &Company) -> Result<(), StorageError> {
        if let Some(share_id) = company
            .share_ids
            .iter()
            .find(|id| !self.shares.contains_key(id))
        {
            return Err(StorageError::ForeignKeyViolation(format!(
                "company {} references missing share {}",
                company.id, share_id
            )));
        }
        Ok(())
    }

    pub(crate) fn check_user(&self, user: &User) -> Result<(), StorageError> {
        if let Some(share_id) = user.share_ids.iter().find(|id| !self.shares.contains_key(id)) {
            return Err(StorageError::ForeignKeyViolation(format!(
                "user {} references missing share {}",
                user.id, share_id
            )));
        }
        Ok(())
    }

    pub(crate) fn ensure_company_unreferenced(
        &self,
        company_id: CompanyId,
    ) -> Result<(), StorageError> {
        if let Some(share) = self
            .shares
            .values()
            .find(|s| s.company_id == Some(company_id))
        {
            return Err(StorageError::StillReferenced(format!(
                "company {} is still referenced by share {}",
                company_id, share.id
            )));
        }
        Ok(())
    }

    pub(crate) fn ensure_share_unreferenced(&self, share_id: ShareId) -> Result<(), StorageError> {
        if let Some(company) = self.companies.values().find(|c| c.owns_share(share_id)) {
            return Err(StorageError::StillReferenced(format!(
                "share {} is still listed by company {}",
                share_id, company.id
            )));
        }
        if let Some(user) = self.users.values().find(|u| u.holds_share(share_id)) {
            return Err(StorageError::StillReferenced(format!(
                "share {} is still held by user {}",
                share_id, user.id
            )));
        }
        Ok(())
    }

    pub(crate) fn ensure_user_unreferenced(&self, user_id: UserId) -> Result<(), StorageError> {
        if let Some(share) = self.shares.values().find(|s| s.is_held_by(user_id)) {
            return Err(StorageError::StillReferenced(format!(
                "user {} is still listed as holder of share {}",
                user_id, share.id
            )));
        }
        Ok(())
    }
}

/// Process-local store shared by the company, share and user repositories.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))
    }
}
