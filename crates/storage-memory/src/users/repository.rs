use async_trait::async_trait;
use log::debug;

use sharesapp_core::users::{NewUser, User, UserId, UserRepositoryTrait};
use sharesapp_core::Result;

use crate::errors::StorageError;
use crate::store::MemoryStore;

/// Repository for managing user rows
pub struct UserRepository {
    store: MemoryStore,
}

impl UserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_by_id(&self, user_id: UserId) -> Result<Option<User>> {
        let tables = self.store.read()?;
        Ok(tables.users.get(&user_id).cloned())
    }

    fn find_all(&self) -> Result<Vec<User>> {
        let tables = self.store.read()?;
        Ok(tables.users.values().cloned().collect())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let mut tables = self.store.write()?;
        let id = tables.next_user_id();
        let user = new_user.into_user(id);
        tables.users.insert(id, user.clone());
        debug!("Inserted user {}", id);
        Ok(user)
    }

    async fn insert_many(&self, new_users: Vec<NewUser>) -> Result<Vec<User>> {
        let mut tables = self.store.write()?;
        let mut users = Vec::with_capacity(new_users.len());
        for new_user in new_users {
            let id = tables.next_user_id();
            let user = new_user.into_user(id);
            tables.users.insert(id, user.clone());
            users.push(user);
        }
        debug!("Inserted {} users", users.len());
        Ok(users)
    }

    async fn save(&self, user: User) -> Result<User> {
        let mut tables = self.store.write()?;
        if !tables.users.contains_key(&user.id) {
            return Err(StorageError::RowNotFound(format!("user {}", user.id)).into());
        }
        tables.check_user(&user)?;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, user_id: UserId) -> Result<()> {
        let mut tables = self.store.write()?;
        tables.ensure_user_unreferenced(user_id)?;
        tables.users.remove(&user_id);
        debug!("Deleted user {}", user_id);
        Ok(())
    }
}
