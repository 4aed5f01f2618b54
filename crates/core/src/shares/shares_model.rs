//! Share domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::companies::CompanyId;
use crate::errors::{Error, Result, ValidationError};
use crate::users::UserId;

pub type ShareId = i64;

/// Domain model representing a tradable share and its latest quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub id: ShareId,
    pub symbol: String,
    pub prev_close_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub last_sale_price: Option<Decimal>,
    pub last_time_updated: Option<DateTime<Utc>>,
    /// Issuing company. Always set on persisted rows; cleared only while the
    /// share is being detached.
    pub company_id: Option<CompanyId>,
    /// Users holding this share. Kept in sync with `User::share_ids`.
    #[serde(default)]
    pub user_ids: BTreeSet<UserId>,
}

impl Share {
    /// Returns a copy carrying the quote attributes of `update`.
    ///
    /// Identity, owning company and holders are preserved.
    pub fn with_update(&self, update: ShareUpdate) -> Share {
        Share {
            id: self.id,
            symbol: update.symbol,
            prev_close_price: update.prev_close_price,
            high_price: update.high_price,
            low_price: update.low_price,
            open_price: update.open_price,
            last_sale_price: update.last_sale_price,
            last_time_updated: update.last_time_updated,
            company_id: self.company_id,
            user_ids: self.user_ids.clone(),
        }
    }

    pub fn is_held_by(&self, user_id: UserId) -> bool {
        self.user_ids.contains(&user_id)
    }
}

/// Input model for creating a new share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewShare {
    #[serde(default)]
    pub symbol: String,
    pub company_id: Option<CompanyId>,
    pub prev_close_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub last_sale_price: Option<Decimal>,
    pub last_time_updated: Option<DateTime<Utc>>,
}

impl NewShare {
    pub fn new(symbol: impl Into<String>, company_id: CompanyId, last_sale_price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            company_id: Some(company_id),
            last_sale_price: Some(last_sale_price),
            ..Default::default()
        }
    }

    /// Validates the share payload. Does not check that the company exists.
    pub fn validate(&self) -> Result<()> {
        if self.company_id.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "companyId".to_string(),
            )));
        }
        validate_quote(&self.symbol, self.last_sale_price)
    }

    /// Builds the stored row once the store has assigned an id.
    pub fn into_share(self, id: ShareId) -> Share {
        Share {
            id,
            symbol: self.symbol,
            prev_close_price: self.prev_close_price,
            high_price: self.high_price,
            low_price: self.low_price,
            open_price: self.open_price,
            last_sale_price: self.last_sale_price,
            last_time_updated: self.last_time_updated,
            company_id: self.company_id,
            user_ids: BTreeSet::new(),
        }
    }
}

/// Input model replacing the quote attributes of a share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShareUpdate {
    #[serde(default)]
    pub symbol: String,
    pub prev_close_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub low_price: Option<Decimal>,
    pub open_price: Option<Decimal>,
    pub last_sale_price: Option<Decimal>,
    pub last_time_updated: Option<DateTime<Utc>>,
}

impl ShareUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_quote(&self.symbol, self.last_sale_price)
    }
}

fn validate_quote(symbol: &str, last_sale_price: Option<Decimal>) -> Result<()> {
    if symbol.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Wrong share information".to_string(),
        )));
    }
    if last_sale_price.is_none() {
        return Err(Error::Validation(ValidationError::MissingField(
            "lastSalePrice".to_string(),
        )));
    }
    Ok(())
}
