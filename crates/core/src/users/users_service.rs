use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::users_model::{NewUser, User, UserId, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::cache::{EntityCaches, GenericCache};
use crate::constants::{
    NO_SHARES_MESSAGE, NO_USERS_MESSAGE, SHARE_NOT_FOUND_MESSAGE, USER_NOT_FOUND_MESSAGE,
};
use crate::errors::{Error, Result};
use crate::relations::{Association, UserHoldings};
use crate::request_counter::RequestCounter;
use crate::shares::{Share, ShareId, ShareRepositoryTrait};

/// Service for managing users and their holdings through the user cache.
pub struct UserService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    share_repository: Arc<dyn ShareRepositoryTrait>,
    caches: EntityCaches,
    request_counter: Arc<RequestCounter>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        share_repository: Arc<dyn ShareRepositoryTrait>,
        caches: EntityCaches,
        request_counter: Arc<RequestCounter>,
    ) -> Self {
        Self {
            user_repository,
            share_repository,
            caches,
            request_counter,
        }
    }

    fn resolve(&self, user_id: UserId) -> Result<Option<User>> {
        self.caches
            .users
            .get_or_fetch(&user_id, |id| self.user_repository.find_by_id(*id))
    }

    fn resolve_share(&self, share_id: ShareId) -> Result<Option<Share>> {
        self.caches
            .shares
            .get_or_fetch(&share_id, |id| self.share_repository.find_by_id(*id))
    }

    fn require_user(&self, user_id: UserId) -> Result<User> {
        self.resolve(user_id)?
            .ok_or_else(|| Error::not_found_id(USER_NOT_FOUND_MESSAGE, user_id))
    }

    fn require_share(&self, share_id: ShareId) -> Result<Share> {
        self.resolve_share(share_id)?
            .ok_or_else(|| Error::not_found_id(SHARE_NOT_FOUND_MESSAGE, share_id))
    }

    /// Persists both sides of a holding change and refreshes the caches.
    async fn persist_holding(&self, user: User, share: Share) -> Result<Share> {
        let share_id = share.id;
        let user_id = user.id;
        let share = self.share_repository.save(share).await?;
        let user = self.user_repository.save(user).await?;
        self.caches.shares.remove(&share_id);
        self.caches.users.remove(&user_id);
        self.caches.users.put(user_id, user);
        Ok(share)
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        self.request_counter.increment();
        new_user.validate()?;

        let user = self.user_repository.insert(new_user).await?;
        debug!("Created user {}, flushing user cache", user.id);
        self.caches.users.clear();
        self.caches.users.put(user.id, user.clone());
        Ok(user)
    }

    async fn create_many_users(&self, new_users: Vec<NewUser>) -> Result<Vec<User>> {
        self.request_counter.increment();
        if new_users.iter().any(|u| u.validate().is_err()) {
            return Err(Error::bad_request("Wrong users or its name"));
        }

        let users = self.user_repository.insert_many(new_users).await?;
        debug!("Created {} users, flushing user cache", users.len());
        self.caches.users.clear();
        for user in &users {
            self.caches.users.put(user.id, user.clone());
        }
        Ok(users)
    }

    fn get_user(&self, user_id: UserId) -> Result<User> {
        self.request_counter.increment();
        let user = self.require_user(user_id)?;
        self.caches.users.put(user_id, user.clone());
        Ok(user)
    }

    fn get_all_users(&self) -> Result<Vec<User>> {
        self.request_counter.increment();
        let mut users = self.user_repository.find_all()?;
        if users.is_empty() {
            return Err(Error::NotFound(NO_USERS_MESSAGE.to_string()));
        }
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update_user(&self, user_id: UserId, update: UserUpdate) -> Result<User> {
        self.request_counter.increment();
        let current = match self.resolve(user_id)? {
            Some(user) if update.validate().is_ok() => user,
            _ => {
                return Err(Error::bad_request(
                    "Wrong user name or there is no such user",
                ))
            }
        };

        self.caches.users.remove(&user_id);
        let updated = self.user_repository.save(current.with_update(update)).await?;
        self.caches.users.put(user_id, updated.clone());
        Ok(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<User> {
        self.request_counter.increment();
        let snapshot = self.require_user(user_id)?;

        let mut user = snapshot.clone();
        for share_id in snapshot.share_ids.iter().copied() {
            match self.share_repository.find_by_id(share_id)? {
                Some(mut share) => {
                    UserHoldings::detach(&mut user, &mut share);
                    self.share_repository.save(share).await?;
                }
                None => warn!("User {} holds missing share {}", user_id, share_id),
            }
            self.caches.shares.remove(&share_id);
        }

        self.user_repository.delete_by_id(user_id).await?;
        self.caches.users.remove(&user_id);
        debug!("Deleted user {}", user_id);
        Ok(snapshot)
    }

    async fn buy_share(&self, user_id: UserId, share_id: ShareId) -> Result<Share> {
        self.request_counter.increment();
        let mut user = self.require_user(user_id)?;
        let mut share = self.require_share(share_id)?;

        if UserHoldings::is_linked(&user, &share) {
            return Ok(share);
        }
        UserHoldings::attach(&mut user, &mut share);
        debug!("User {} bought share {}", user_id, share_id);
        self.persist_holding(user, share).await
    }

    async fn sell_share(&self, user_id: UserId, share_id: ShareId) -> Result<Share> {
        self.request_counter.increment();
        let mut user = self.require_user(user_id)?;
        let mut share = self.require_share(share_id)?;

        if !UserHoldings::detach(&mut user, &mut share) {
            return Err(Error::NotFound(format!(
                "User {} does not hold share {}",
                user_id, share_id
            )));
        }
        debug!("User {} sold share {}", user_id, share_id);
        self.persist_holding(user, share).await
    }

    fn get_user_shares(&self, user_id: UserId) -> Result<Vec<Share>> {
        self.request_counter.increment();
        let user = self.require_user(user_id)?;
        if user.share_ids.is_empty() {
            return Err(Error::NotFound(NO_SHARES_MESSAGE.to_string()));
        }

        let mut shares = Vec::with_capacity(user.share_ids.len());
        for share_id in &user.share_ids {
            match self.resolve_share(*share_id)? {
                Some(share) => shares.push(share),
                None => warn!("User {} holds missing share {}", user_id, share_id),
            }
        }
        shares.sort_by_key(|s| s.id);
        self.caches.users.put(user_id, user);
        Ok(shares)
    }

    fn get_not_purchased_shares(&self, user_id: UserId) -> Result<Vec<Share>> {
        self.request_counter.increment();
        let user = self.require_user(user_id)?;
        let shares = self.share_repository.find_all()?;
        if shares.is_empty() {
            return Err(Error::NotFound(NO_SHARES_MESSAGE.to_string()));
        }

        let mut available: Vec<Share> = shares
            .into_iter()
            .filter(|s| !user.holds_share(s.id))
            .collect();
        available.sort_by_key(|s| s.id);
        self.caches.users.put(user_id, user);
        Ok(available)
    }
}
