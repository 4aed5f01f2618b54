//! Companies module - domain models, services, and traits.

mod companies_model;
mod companies_service;
mod companies_traits;

#[cfg(test)]
mod companies_model_tests;

// Re-export the public interface
pub use companies_model::{Company, CompanyId, CompanyUpdate, NewCompany};
pub use companies_service::CompanyService;
pub use companies_traits::{CompanyRepositoryTrait, CompanyServiceTrait};
