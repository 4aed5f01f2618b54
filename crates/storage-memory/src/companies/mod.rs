//! In-memory storage implementation for companies.

mod repository;

pub use repository::CompanyRepository;
