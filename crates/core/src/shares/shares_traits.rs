//! Share repository and service traits.

use async_trait::async_trait;

use super::shares_model::{NewShare, Share, ShareId, ShareUpdate};
use crate::companies::Company;
use crate::errors::Result;
use crate::users::User;

/// Trait defining the contract for Share repository operations.
///
/// Implementations must reject a share whose `company_id` is unset or points
/// at a missing company.
#[async_trait]
pub trait ShareRepositoryTrait: Send + Sync {
    fn find_by_id(&self, share_id: ShareId) -> Result<Option<Share>>;

    fn find_all(&self) -> Result<Vec<Share>>;

    async fn insert(&self, new_share: NewShare) -> Result<Share>;

    async fn insert_many(&self, new_shares: Vec<NewShare>) -> Result<Vec<Share>>;

    /// Persists an existing share, including its owner and holders.
    async fn save(&self, share: Share) -> Result<Share>;

    async fn delete_by_id(&self, share_id: ShareId) -> Result<()>;
}

/// Trait defining the contract for Share service operations.
#[async_trait]
pub trait ShareServiceTrait: Send + Sync {
    /// Creates a share and attaches it to its company.
    async fn create_share(&self, new_share: NewShare) -> Result<Share>;

    /// Creates every share or none of them.
    async fn create_many_shares(&self, new_shares: Vec<NewShare>) -> Result<Vec<Share>>;

    fn get_share(&self, share_id: ShareId) -> Result<Share>;

    /// Returns the company that issued the share.
    fn get_share_company(&self, share_id: ShareId) -> Result<Company>;

    fn get_all_shares(&self) -> Result<Vec<Share>>;

    async fn update_share(&self, share_id: ShareId, update: ShareUpdate) -> Result<Share>;

    /// Detaches the share from its company and holders, then deletes it.
    async fn delete_share(&self, share_id: ShareId) -> Result<Share>;

    /// Lists the users holding a share. An empty list is `NotFound`.
    fn get_share_holders(&self, share_id: ShareId) -> Result<Vec<User>>;
}
