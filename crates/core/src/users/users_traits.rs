//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, User, UserId, UserUpdate};
use crate::errors::Result;
use crate::shares::{Share, ShareId};

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_id(&self, user_id: UserId) -> Result<Option<User>>;

    fn find_all(&self) -> Result<Vec<User>>;

    async fn insert(&self, new_user: NewUser) -> Result<User>;

    async fn insert_many(&self, new_users: Vec<NewUser>) -> Result<Vec<User>>;

    /// Persists an existing user, including its holdings.
    async fn save(&self, user: User) -> Result<User>;

    async fn delete_by_id(&self, user_id: UserId) -> Result<()>;
}

/// Trait defining the contract for User service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    /// Creates every user or none of them.
    async fn create_many_users(&self, new_users: Vec<NewUser>) -> Result<Vec<User>>;

    fn get_user(&self, user_id: UserId) -> Result<User>;

    fn get_all_users(&self) -> Result<Vec<User>>;

    async fn update_user(&self, user_id: UserId, update: UserUpdate) -> Result<User>;

    /// Releases every holding, then deletes the user.
    async fn delete_user(&self, user_id: UserId) -> Result<User>;

    /// Records that the user holds the share. Returns the share.
    async fn buy_share(&self, user_id: UserId, share_id: ShareId) -> Result<Share>;

    /// Removes the holding. Returns the share.
    async fn sell_share(&self, user_id: UserId, share_id: ShareId) -> Result<Share>;

    /// Lists the shares a user holds, ordered by id. An empty list is `NotFound`.
    fn get_user_shares(&self, user_id: UserId) -> Result<Vec<Share>>;

    /// Lists every share the user does not hold, ordered by id.
    fn get_not_purchased_shares(&self, user_id: UserId) -> Result<Vec<Share>>;
}
