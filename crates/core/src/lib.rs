//! Sharesapp Core - Domain entities, cache layer, services, and traits.
//!
//! This crate contains the record-keeping logic for companies, shares and
//! share holders. It is store-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate (or any other store).

pub mod cache;
pub mod companies;
pub mod config;
pub mod constants;
pub mod errors;
#[cfg(test)]
mod errors_tests;
pub mod relations;
pub mod request_counter;
pub mod shares;
pub mod users;

pub use cache::{BoundedCache, EntityCaches, GenericCache};
pub use config::CacheConfig;
pub use request_counter::RequestCounter;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
