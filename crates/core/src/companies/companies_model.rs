//! Company domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{Error, Result, ValidationError};
use crate::shares::ShareId;

pub type CompanyId = i64;

/// Domain model representing a listed company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Market capitalization
    pub capitalization: Option<Decimal>,
    pub address: Option<String>,
    pub website: Option<String>,
    /// Shares issued by this company. Kept in sync with `Share::company_id`.
    #[serde(default)]
    pub share_ids: BTreeSet<ShareId>,
}

impl Company {
    /// Returns a copy carrying the descriptive attributes of `update`.
    ///
    /// Identity and the share collection are preserved.
    pub fn with_update(&self, update: CompanyUpdate) -> Company {
        Company {
            id: self.id,
            name: update.name,
            capitalization: update.capitalization,
            address: update.address,
            website: update.website,
            share_ids: self.share_ids.clone(),
        }
    }

    pub fn owns_share(&self, share_id: ShareId) -> bool {
        self.share_ids.contains(&share_id)
    }
}

/// Input model for creating a new company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[serde(default)]
    pub name: String,
    pub capitalization: Option<Decimal>,
    pub address: Option<String>,
    pub website: Option<String>,
}

impl NewCompany {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Validates the new company data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }

    /// Builds the stored row once the store has assigned an id.
    pub fn into_company(self, id: CompanyId) -> Company {
        Company {
            id,
            name: self.name,
            capitalization: self.capitalization,
            address: self.address,
            website: self.website,
            share_ids: BTreeSet::new(),
        }
    }
}

/// Input model replacing the descriptive attributes of a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(default)]
    pub name: String,
    pub capitalization: Option<Decimal>,
    pub address: Option<String>,
    pub website: Option<String>,
}

impl CompanyUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wrong company name".to_string(),
        )));
    }
    Ok(())
}
