//! Catalog service: services and cities reference data.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{City, Service, ServiceChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Catalog use cases: public reads and admin service management.
///
/// Catalog entries are never hard-deleted; deactivation removes them from
/// the public surface while existing leads keep referring to them.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Active services for the public site, ordered by name
    async fn active_services(&self) -> AppResult<Vec<Service>>;

    /// Resolve a public service page; deactivated slugs read as not found
    async fn service_by_slug(&self, slug: &str) -> AppResult<Service>;

    /// All services for the admin table
    async fn all_services(&self) -> AppResult<Vec<Service>>;

    /// Apply an admin edit to a service
    async fn update_service(&self, id: Uuid, changes: ServiceChanges) -> AppResult<Service>;

    /// Active cities for the public site, ordered by name
    async fn active_cities(&self) -> AppResult<Vec<City>>;

    /// All cities for the admin company form
    async fn all_cities(&self) -> AppResult<Vec<City>>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn active_services(&self) -> AppResult<Vec<Service>> {
        self.uow.services().list_active().await
    }

    async fn service_by_slug(&self, slug: &str) -> AppResult<Service> {
        self.uow
            .services()
            .find_active_by_slug(slug)
            .await?
            .ok_or_not_found()
    }

    async fn all_services(&self) -> AppResult<Vec<Service>> {
        self.uow.services().list_all().await
    }

    async fn update_service(&self, id: Uuid, changes: ServiceChanges) -> AppResult<Service> {
        if changes.is_empty() {
            return Err(AppError::validation("No changes provided"));
        }

        if let Some(lead_price) = changes.lead_price {
            if lead_price < Decimal::ZERO {
                return Err(AppError::validation("Lead price must not be negative"));
            }
        }

        self.uow.services().update(id, changes).await
    }

    async fn active_cities(&self) -> AppResult<Vec<City>> {
        self.uow.cities().list_active().await
    }

    async fn all_cities(&self) -> AppResult<Vec<City>> {
        self.uow.cities().list_all().await
    }
}
