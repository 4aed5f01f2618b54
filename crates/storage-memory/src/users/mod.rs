//! In-memory storage implementation for users.

mod repository;

pub use repository::UserRepository;
