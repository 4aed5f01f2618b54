//! In-memory storage implementation for shares.

mod repository;

pub use repository::ShareRepository;
