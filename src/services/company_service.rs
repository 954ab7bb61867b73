//! Company directory service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Company, CompanyChanges, CompanyFilter, CreateCompany};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Company directory use cases.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Companies for the admin table, ordered by name
    async fn list(&self, filter: CompanyFilter) -> AppResult<Vec<Company>>;

    async fn get(&self, id: Uuid) -> AppResult<Company>;

    async fn create(&self, company: CreateCompany) -> AppResult<Company>;

    async fn update(&self, id: Uuid, changes: CompanyChanges) -> AppResult<Company>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CompanyService using Unit of Work.
pub struct CompanyManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CompanyManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CompanyService for CompanyManager<U> {
    async fn list(&self, filter: CompanyFilter) -> AppResult<Vec<Company>> {
        self.uow.companies().list(filter).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Company> {
        self.uow.companies().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, company: CreateCompany) -> AppResult<Company> {
        // The HTTP layer validates the payload too, but the invariant is the
        // domain's: a company must declare coverage to be creatable.
        if company.service_ids.is_empty() {
            return Err(AppError::validation("At least one service is required"));
        }
        if company.cities.is_empty() {
            return Err(AppError::validation("At least one city is required"));
        }

        self.uow.companies().create(company).await
    }

    async fn update(&self, id: Uuid, changes: CompanyChanges) -> AppResult<Company> {
        if matches!(&changes.service_ids, Some(ids) if ids.is_empty()) {
            return Err(AppError::validation("At least one service is required"));
        }
        if matches!(&changes.cities, Some(cities) if cities.is_empty()) {
            return Err(AppError::validation("At least one city is required"));
        }

        self.uow.companies().update(id, changes).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.uow.companies().delete(id).await
    }
}
