use async_trait::async_trait;
use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::shares_model::{NewShare, Share, ShareId, ShareUpdate};
use super::shares_traits::{ShareRepositoryTrait, ShareServiceTrait};
use crate::cache::{EntityCaches, GenericCache};
use crate::companies::{Company, CompanyId, CompanyRepositoryTrait};
use crate::constants::{
    COMPANY_NOT_FOUND_MESSAGE, NO_HOLDERS_MESSAGE, NO_SHARES_MESSAGE, SHARE_NOT_FOUND_MESSAGE,
};
use crate::errors::{Error, Result};
use crate::relations::{Association, CompanyShares, UserHoldings};
use crate::request_counter::RequestCounter;
use crate::users::{User, UserRepositoryTrait};

/// Service for managing shares through the share cache.
pub struct ShareService {
    share_repository: Arc<dyn ShareRepositoryTrait>,
    company_repository: Arc<dyn CompanyRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    caches: EntityCaches,
    request_counter: Arc<RequestCounter>,
}

impl ShareService {
    pub fn new(
        share_repository: Arc<dyn ShareRepositoryTrait>,
        company_repository: Arc<dyn CompanyRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        caches: EntityCaches,
        request_counter: Arc<RequestCounter>,
    ) -> Self {
        Self {
            share_repository,
            company_repository,
            user_repository,
            caches,
            request_counter,
        }
    }

    fn resolve(&self, share_id: ShareId) -> Result<Option<Share>> {
        self.caches
            .shares
            .get_or_fetch(&share_id, |id| self.share_repository.find_by_id(*id))
    }

    fn resolve_company(&self, company_id: CompanyId) -> Result<Option<Company>> {
        self.caches
            .companies
            .get_or_fetch(&company_id, |id| self.company_repository.find_by_id(*id))
    }

    fn require_company(&self, share: &Share) -> Result<Company> {
        let company_id = share
            .company_id
            .ok_or_else(|| Error::NotFound(format!("Share {} has no company", share.id)))?;
        self.resolve_company(company_id)?
            .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))
    }

    /// Persists companies that gained new shares and evicts their cache entries.
    async fn attach_to_companies(&self, shares: &mut [Share]) -> Result<()> {
        let mut companies: BTreeMap<CompanyId, Company> = BTreeMap::new();
        for share in shares.iter_mut() {
            let Some(company_id) = share.company_id else {
                continue;
            };
            if !companies.contains_key(&company_id) {
                let company = self
                    .resolve_company(company_id)?
                    .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))?;
                companies.insert(company_id, company);
            }
            if let Some(company) = companies.get_mut(&company_id) {
                CompanyShares::attach(company, share);
            }
        }
        for (company_id, company) in companies {
            self.company_repository.save(company).await?;
            self.caches.companies.remove(&company_id);
        }
        Ok(())
    }
}

#[async_trait]
impl ShareServiceTrait for ShareService {
    async fn create_share(&self, new_share: NewShare) -> Result<Share> {
        self.request_counter.increment();
        new_share.validate()?;
        let company_id = new_share
            .company_id
            .ok_or_else(|| Error::bad_request("Wrong share information"))?;
        let mut company = self
            .resolve_company(company_id)?
            .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))?;

        let mut share = self.share_repository.insert(new_share).await?;
        CompanyShares::attach(&mut company, &mut share);
        self.company_repository.save(company).await?;
        self.caches.companies.remove(&company_id);

        debug!("Created share {}, flushing share cache", share.id);
        self.caches.shares.clear();
        self.caches.shares.put(share.id, share.clone());
        Ok(share)
    }

    async fn create_many_shares(&self, new_shares: Vec<NewShare>) -> Result<Vec<Share>> {
        self.request_counter.increment();
        if new_shares.iter().any(|s| s.validate().is_err()) {
            return Err(Error::bad_request("Wrong shares or its name"));
        }
        let company_ids: HashSet<CompanyId> =
            new_shares.iter().filter_map(|s| s.company_id).collect();
        for company_id in company_ids {
            if self.resolve_company(company_id)?.is_none() {
                return Err(Error::bad_request(format!(
                    "Wrong shares: {}{}",
                    COMPANY_NOT_FOUND_MESSAGE, company_id
                )));
            }
        }

        let mut shares = self.share_repository.insert_many(new_shares).await?;
        self.attach_to_companies(&mut shares).await?;

        debug!("Created {} shares, flushing share cache", shares.len());
        self.caches.shares.clear();
        for share in &shares {
            self.caches.shares.put(share.id, share.clone());
        }
        Ok(shares)
    }

    fn get_share(&self, share_id: ShareId) -> Result<Share> {
        self.request_counter.increment();
        let share = self
            .resolve(share_id)?
            .ok_or_else(|| Error::not_found_id(SHARE_NOT_FOUND_MESSAGE, share_id))?;
        self.caches.shares.put(share_id, share.clone());
        Ok(share)
    }

    fn get_share_company(&self, share_id: ShareId) -> Result<Company> {
        self.request_counter.increment();
        let share = self
            .resolve(share_id)?
            .ok_or_else(|| Error::not_found_id(SHARE_NOT_FOUND_MESSAGE, share_id))?;
        let company = self.require_company(&share)?;
        self.caches.shares.put(share_id, share);
        Ok(company)
    }

    fn get_all_shares(&self) -> Result<Vec<Share>> {
        self.request_counter.increment();
        let mut shares = self.share_repository.find_all()?;
        if shares.is_empty() {
            return Err(Error::NotFound(NO_SHARES_MESSAGE.to_string()));
        }
        shares.sort_by_key(|s| s.id);
        Ok(shares)
    }

    async fn update_share(&self, share_id: ShareId, update: ShareUpdate) -> Result<Share> {
        self.request_counter.increment();
        let current = match self.resolve(share_id)? {
            Some(share) if update.validate().is_ok() => share,
            _ => {
                return Err(Error::bad_request(
                    "Wrong share information or this share doesn't exist",
                ))
            }
        };

        self.caches.shares.remove(&share_id);
        let updated = self.share_repository.save(current.with_update(update)).await?;
        self.caches.shares.put(share_id, updated.clone());
        Ok(updated)
    }

    async fn delete_share(&self, share_id: ShareId) -> Result<Share> {
        self.request_counter.increment();
        let snapshot = self
            .resolve(share_id)?
            .ok_or_else(|| Error::not_found_id(SHARE_NOT_FOUND_MESSAGE, share_id))?;
        let mut company = self.require_company(&snapshot)?;

        let mut share = snapshot.clone();
        CompanyShares::detach(&mut company, &mut share);
        let company_id = company.id;
        self.company_repository.save(company).await?;
        self.caches.companies.remove(&company_id);

        for user_id in snapshot.user_ids.iter().copied() {
            match self.user_repository.find_by_id(user_id)? {
                Some(mut user) => {
                    UserHoldings::detach(&mut user, &mut share);
                    self.user_repository.save(user).await?;
                }
                None => warn!("Share {} lists missing holder {}", share_id, user_id),
            }
            self.caches.users.remove(&user_id);
        }

        self.share_repository.delete_by_id(share_id).await?;
        self.caches.shares.remove(&share_id);
        debug!("Deleted share {}", share_id);
        Ok(snapshot)
    }

    fn get_share_holders(&self, share_id: ShareId) -> Result<Vec<User>> {
        self.request_counter.increment();
        let share = self
            .resolve(share_id)?
            .ok_or_else(|| Error::not_found_id(SHARE_NOT_FOUND_MESSAGE, share_id))?;
        if share.user_ids.is_empty() {
            return Err(Error::NotFound(NO_HOLDERS_MESSAGE.to_string()));
        }

        let mut holders = Vec::with_capacity(share.user_ids.len());
        for user_id in &share.user_ids {
            let user = self
                .caches
                .users
                .get_or_fetch(user_id, |id| self.user_repository.find_by_id(*id))?;
            match user {
                Some(user) => holders.push(user),
                None => warn!("Share {} lists missing holder {}", share_id, user_id),
            }
        }
        self.caches.shares.put(share_id, share);
        Ok(holders)
    }
}
