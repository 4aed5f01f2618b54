//! In-memory storage implementation for sharesapp.
//!
//! This crate implements the repository traits defined in `sharesapp-core`
//! on top of process-local tables. It behaves like a store with eager
//! referential integrity:
//! - a share must always name an existing company
//! - relation id sets may only name existing rows
//! - a row cannot be deleted while another row still references it
//!
//! ```text
//!        core (services, cache)
//!                 │
//!                 ▼
//!     storage-memory (this crate)
//!                 │
//!                 ▼
//!          MemoryStore tables
//! ```

pub mod errors;
pub mod store;

// Repository implementations
pub mod companies;
pub mod shares;
pub mod users;

pub use companies::CompanyRepository;
pub use shares::ShareRepository;
pub use store::MemoryStore;
pub use users::UserRepository;

// Re-export storage errors
pub use errors::StorageError;

// Re-export from sharesapp-core for convenience
pub use sharesapp_core::errors::{Error, Result, StoreError};
