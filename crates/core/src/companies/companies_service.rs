use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::companies_model::{Company, CompanyId, CompanyUpdate, NewCompany};
use super::companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
use crate::cache::{EntityCaches, GenericCache};
use crate::constants::{
    COMPANY_NOT_FOUND_MESSAGE, NO_COMPANIES_MESSAGE, NO_SHARES_MESSAGE, SHARE_NOT_FOUND_MESSAGE,
};
use crate::errors::{Error, Result};
use crate::relations::{reassign_share, Association, CompanyShares, UserHoldings};
use crate::request_counter::RequestCounter;
use crate::shares::{Share, ShareId, ShareRepositoryTrait};
use crate::users::UserRepositoryTrait;

/// Service for managing companies through the company cache.
pub struct CompanyService {
    company_repository: Arc<dyn CompanyRepositoryTrait>,
    share_repository: Arc<dyn ShareRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
    caches: EntityCaches,
    request_counter: Arc<RequestCounter>,
}

impl CompanyService {
    pub fn new(
        company_repository: Arc<dyn CompanyRepositoryTrait>,
        share_repository: Arc<dyn ShareRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
        caches: EntityCaches,
        request_counter: Arc<RequestCounter>,
    ) -> Self {
        Self {
            company_repository,
            share_repository,
            user_repository,
            caches,
            request_counter,
        }
    }

    /// Cache first, then store. Does not touch the cache.
    fn resolve(&self, company_id: CompanyId) -> Result<Option<Company>> {
        self.caches
            .companies
            .get_or_fetch(&company_id, |id| self.company_repository.find_by_id(*id))
    }

    fn resolve_share(&self, share_id: ShareId) -> Result<Option<Share>> {
        self.caches
            .shares
            .get_or_fetch(&share_id, |id| self.share_repository.find_by_id(*id))
    }

    /// Releases a share that is about to be deleted from every user holding it.
    async fn release_holders(&self, share: &mut Share) -> Result<()> {
        for user_id in share.user_ids.clone() {
            match self.user_repository.find_by_id(user_id)? {
                Some(mut user) => {
                    UserHoldings::detach(&mut user, share);
                    self.user_repository.save(user).await?;
                }
                None => {
                    warn!("Share {} lists missing holder {}", share.id, user_id);
                    share.user_ids.remove(&user_id);
                }
            }
            self.caches.users.remove(&user_id);
        }
        Ok(())
    }
}

#[async_trait]
impl CompanyServiceTrait for CompanyService {
    async fn create_company(&self, new_company: NewCompany) -> Result<Company> {
        self.request_counter.increment();
        new_company.validate()?;

        let company = self.company_repository.insert(new_company).await?;
        debug!("Created company {}, flushing company cache", company.id);
        self.caches.companies.clear();
        self.caches.companies.put(company.id, company.clone());
        Ok(company)
    }

    async fn create_many_companies(&self, new_companies: Vec<NewCompany>) -> Result<Vec<Company>> {
        self.request_counter.increment();
        if new_companies.iter().any(|c| c.validate().is_err()) {
            return Err(Error::bad_request("Wrong companies or its name"));
        }

        let companies = self.company_repository.insert_many(new_companies).await?;
        debug!("Created {} companies, flushing company cache", companies.len());
        self.caches.companies.clear();
        for company in &companies {
            self.caches.companies.put(company.id, company.clone());
        }
        Ok(companies)
    }

    fn get_company(&self, company_id: CompanyId) -> Result<Company> {
        self.request_counter.increment();
        let company = self
            .resolve(company_id)?
            .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))?;
        self.caches.companies.put(company_id, company.clone());
        Ok(company)
    }

    fn get_all_companies(&self) -> Result<Vec<Company>> {
        self.request_counter.increment();
        let mut companies = self.company_repository.find_all()?;
        if companies.is_empty() {
            return Err(Error::NotFound(NO_COMPANIES_MESSAGE.to_string()));
        }
        companies.sort_by_key(|c| c.id);
        Ok(companies)
    }

    async fn update_company(
        &self,
        company_id: CompanyId,
        update: CompanyUpdate,
    ) -> Result<Company> {
        self.request_counter.increment();
        let current = match self.resolve(company_id)? {
            Some(company) if update.validate().is_ok() => company,
            _ => {
                return Err(Error::bad_request(
                    "Wrong company name or there is no such company",
                ))
            }
        };

        self.caches.companies.remove(&company_id);
        let updated = self
            .company_repository
            .save(current.with_update(update))
            .await?;
        self.caches.companies.put(company_id, updated.clone());
        Ok(updated)
    }

    async fn delete_company(&self, company_id: CompanyId) -> Result<Company> {
        self.request_counter.increment();
        let snapshot = self
            .resolve(company_id)?
            .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))?;

        // Shares go one at a time: the company is persisted without the share
        // before the share row is deleted, so no row ever points at a deleted one.
        let mut company = snapshot.clone();
        for share_id in snapshot.share_ids.iter().copied() {
            let Some(mut share) = self.share_repository.find_by_id(share_id)? else {
                warn!("Company {} lists missing share {}", company_id, share_id);
                company.share_ids.remove(&share_id);
                company = self.company_repository.save(company).await?;
                continue;
            };

            CompanyShares::detach(&mut company, &mut share);
            company = self.company_repository.save(company).await?;
            self.release_holders(&mut share).await?;
            self.share_repository.delete_by_id(share_id).await?;
            self.caches.shares.remove(&share_id);
            debug!("Deleted share {} of company {}", share_id, company_id);
        }

        self.company_repository.delete_by_id(company_id).await?;
        self.caches.companies.remove(&company_id);
        debug!("Deleted company {}", company_id);
        Ok(snapshot)
    }

    fn get_company_shares(&self, company_id: CompanyId) -> Result<Vec<Share>> {
        self.request_counter.increment();
        let company = self
            .resolve(company_id)?
            .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))?;
        if company.share_ids.is_empty() {
            return Err(Error::NotFound(NO_SHARES_MESSAGE.to_string()));
        }

        let mut shares = Vec::with_capacity(company.share_ids.len());
        for share_id in &company.share_ids {
            match self.resolve_share(*share_id)? {
                Some(share) => shares.push(share),
                None => warn!("Company {} lists missing share {}", company_id, share_id),
            }
        }
        self.caches.companies.put(company_id, company);
        Ok(shares)
    }

    async fn attach_share(&self, company_id: CompanyId, share_id: ShareId) -> Result<Share> {
        self.request_counter.increment();
        let mut company = self
            .resolve(company_id)?
            .ok_or_else(|| Error::not_found_id(COMPANY_NOT_FOUND_MESSAGE, company_id))?;
        let mut share = self
            .resolve_share(share_id)?
            .ok_or_else(|| Error::not_found_id(SHARE_NOT_FOUND_MESSAGE, share_id))?;

        if CompanyShares::is_linked(&company, &share) {
            return Ok(share);
        }

        let previous = match share.company_id.filter(|id| *id != company_id) {
            Some(previous_id) => self.company_repository.find_by_id(previous_id)?,
            None => None,
        };

        match previous {
            Some(mut previous) => {
                reassign_share(&mut previous, &mut company, &mut share);
                // The share moves first so the old owner never lists a share
                // that still points at it.
                let share = self.share_repository.save(share).await?;
                let company = self.company_repository.save(company).await?;
                let previous = self.company_repository.save(previous).await?;
                self.caches.companies.remove(&previous.id);
                self.caches.shares.remove(&share_id);
                self.caches.companies.put(company_id, company);
                Ok(share)
            }
            None => {
                CompanyShares::attach(&mut company, &mut share);
                let share = self.share_repository.save(share).await?;
                let company = self.company_repository.save(company).await?;
                self.caches.shares.remove(&share_id);
                self.caches.companies.put(company_id, company);
                Ok(share)
            }
        }
    }
}
