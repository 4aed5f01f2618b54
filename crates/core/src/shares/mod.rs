//! Shares module - domain models, services, and traits.

mod shares_model;
mod shares_service;
mod shares_traits;

#[cfg(test)]
mod shares_model_tests;

// Re-export the public interface
pub use shares_model::{NewShare, Share, ShareId, ShareUpdate};
pub use shares_service::ShareService;
pub use shares_traits::{ShareRepositoryTrait, ShareServiceTrait};
