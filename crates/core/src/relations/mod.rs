//! Relations module - keeps both sides of the company/share and user/share
//! associations in step.
//!
//! Entities only store ids of their counterparts. Every edit of those id sets
//! goes through an [`Association`] so that the owner and the member are
//! updated in the same call, before anything is persisted.

mod associations;

#[cfg(test)]
mod associations_tests;

pub use associations::{reassign_share, Association, CompanyShares, UserHoldings};
