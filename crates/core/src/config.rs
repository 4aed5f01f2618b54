//! Runtime configuration for the cache layer.

use serde::{Deserialize, Serialize};

use crate::constants::{CACHE_CAPACITY_ENV, DEFAULT_CACHE_CAPACITY};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    /// Entries held by each per-type cache before it is flushed.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let config = Self { capacity };
        config.validate()?;
        Ok(config)
    }

    /// Reads `SHARESAPP_CACHE_CAPACITY`, falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(CACHE_CAPACITY_ENV) {
            Ok(raw) => Self::parse_capacity(&raw),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(Error::InvalidConfigValue(format!(
                "{}: {}",
                CACHE_CAPACITY_ENV, e
            ))),
        }
    }

    pub fn parse_capacity(raw: &str) -> Result<Self> {
        let capacity = raw.trim().parse::<usize>().map_err(|e| {
            Error::InvalidConfigValue(format!("{}='{}': {}", CACHE_CAPACITY_ENV, raw, e))
        })?;
        Self::with_capacity(capacity)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfigValue(
                "Cache capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
