//! User domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{Error, Result, ValidationError};
use crate::shares::ShareId;

pub type UserId = i64;

/// Domain model representing a share holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Credential; accepted on input, never written out.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    /// Shares held by this user. Kept in sync with `Share::user_ids`.
    #[serde(default)]
    pub share_ids: BTreeSet<ShareId>,
}

impl User {
    /// Returns a copy carrying the profile attributes of `update`.
    ///
    /// Identity, credential and holdings are preserved.
    pub fn with_update(&self, update: UserUpdate) -> User {
        User {
            id: self.id,
            first_name: update.first_name,
            last_name: update.last_name,
            email: update.email,
            phone_number: update.phone_number,
            password: self.password.clone(),
            share_ids: self.share_ids.clone(),
        }
    }

    pub fn holds_share(&self, share_id: ShareId) -> bool {
        self.share_ids.contains(&share_id)
    }
}

/// Input model for creating a new user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

impl NewUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_names(&self.first_name, &self.last_name)
    }

    /// Builds the stored row once the store has assigned an id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            password: self.password,
            share_ids: BTreeSet::new(),
        }
    }
}

/// Input model replacing the profile attributes of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_names(&self.first_name, &self.last_name)
    }
}

fn validate_names(first_name: &str, last_name: &str) -> Result<()> {
    if first_name.trim().is_empty() || last_name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wrong user name".to_string(),
        )));
    }
    Ok(())
}
