use async_trait::async_trait;
use log::debug;

use sharesapp_core::companies::{Company, CompanyId, CompanyRepositoryTrait, NewCompany};
use sharesapp_core::Result;

use crate::errors::StorageError;
use crate::store::MemoryStore;

/// Repository for managing company rows
pub struct CompanyRepository {
    store: MemoryStore,
}

impl CompanyRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CompanyRepositoryTrait for CompanyRepository {
    fn find_by_id(&self, company_id: CompanyId) -> Result<Option<Company>> {
        let tables = self.store.read()?;
        Ok(tables.companies.get(&company_id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Company>> {
        let tables = self.store.read()?;
        Ok(tables.companies.values().cloned().collect())
    }

    async fn insert(&self, new_company: NewCompany) -> Result<Company> {
        let mut tables = self.store.write()?;
        let id = tables.next_company_id();
        let company = new_company.into_company(id);
        tables.companies.insert(id, company.clone());
        debug!("Inserted company {}", id);
        Ok(company)
    }

    async fn insert_many(&self, new_companies: Vec<NewCompany>) -> Result<Vec<Company>> {
        let mut tables = self.store.write()?;
        let mut companies = Vec::with_capacity(new_companies.len());
        for new_company in new_companies {
            let id = tables.next_company_id();
            let company = new_company.into_company(id);
            tables.companies.insert(id, company.clone());
            companies.push(company);
        }
        debug!("Inserted {} companies", companies.len());
        Ok(companies)
    }

    async fn save(&self, company: Company) -> Result<Company> {
        let mut tables = self.store.write()?;
        if !tables.companies.contains_key(&company.id) {
            return Err(StorageError::RowNotFound(format!("company {}", company.id)).into());
        }
        tables.check_company(&company)?;
        tables.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn delete_by_id(&self, company_id: CompanyId) -> Result<()> {
        let mut tables = self.store.write()?;
        tables.ensure_company_unreferenced(company_id)?;
        tables.companies.remove(&company_id);
        debug!("Deleted company {}", company_id);
        Ok(())
    }
}
