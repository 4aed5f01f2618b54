//! Company repository and service traits.
//!
//! These traits define the contract for company operations without any
//! store-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::companies_model::{Company, CompanyId, CompanyUpdate, NewCompany};
use crate::errors::Result;
use crate::shares::{Share, ShareId};

/// Trait defining the contract for Company repository operations.
#[async_trait]
pub trait CompanyRepositoryTrait: Send + Sync {
    /// Retrieves a company by its ID, `None` when no row exists.
    fn find_by_id(&self, company_id: CompanyId) -> Result<Option<Company>>;

    fn find_all(&self) -> Result<Vec<Company>>;

    /// Persists a new company; the store assigns the id.
    async fn insert(&self, new_company: NewCompany) -> Result<Company>;

    async fn insert_many(&self, new_companies: Vec<NewCompany>) -> Result<Vec<Company>>;

    /// Persists an existing company, including its share collection.
    async fn save(&self, company: Company) -> Result<Company>;

    async fn delete_by_id(&self, company_id: CompanyId) -> Result<()>;
}

/// Trait defining the contract for Company service operations.
///
/// Every operation goes through the company cache; see `CompanyService`.
#[async_trait]
pub trait CompanyServiceTrait: Send + Sync {
    async fn create_company(&self, new_company: NewCompany) -> Result<Company>;

    /// Creates every company or none of them.
    async fn create_many_companies(&self, new_companies: Vec<NewCompany>) -> Result<Vec<Company>>;

    fn get_company(&self, company_id: CompanyId) -> Result<Company>;

    fn get_all_companies(&self) -> Result<Vec<Company>>;

    async fn update_company(&self, company_id: CompanyId, update: CompanyUpdate)
        -> Result<Company>;

    /// Deletes a company together with every share it issued.
    ///
    /// Returns the company as it was before deletion.
    async fn delete_company(&self, company_id: CompanyId) -> Result<Company>;

    /// Lists the shares issued by a company. An empty list is `NotFound`.
    fn get_company_shares(&self, company_id: CompanyId) -> Result<Vec<Share>>;

    /// Moves a share to this company, detaching it from its previous owner.
    async fn attach_share(&self, company_id: CompanyId, share_id: ShareId) -> Result<Share>;
}
