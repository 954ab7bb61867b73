//! Service catalog repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::service::{self, Entity as ServiceEntity};
use crate::domain::{Service, ServiceChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read/write access to the service catalog.
///
/// Services are never hard-deleted; admins edit fields and flip `is_active`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Active services, ordered by name ascending
    async fn list_active(&self) -> AppResult<Vec<Service>>;

    /// All services including deactivated ones, ordered by name ascending
    async fn list_all(&self) -> AppResult<Vec<Service>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>>;

    /// Resolve a public service page slug (active services only)
    async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<Service>>;

    /// Apply an admin edit; absent fields stay untouched
    async fn update(&self, id: Uuid, changes: ServiceChanges) -> AppResult<Service>;
}

/// SeaORM-backed implementation of [`ServiceRepository`].
#[derive(Clone)]
pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn list_active(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .filter(service::Column::IsActive.eq(true))
            .order_by_asc(service::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .order_by_asc(service::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>> {
        let model = ServiceEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Service::from))
    }

    async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<Service>> {
        let model = ServiceEntity::find()
            .filter(service::Column::Slug.eq(slug))
            .filter(service::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;

        Ok(model.map(Service::from))
    }

    async fn update(&self, id: Uuid, changes: ServiceChanges) -> AppResult<Service> {
        let model = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: service::ActiveModel = model.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(name_en) = changes.name_en {
            active.name_en = Set(name_en);
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(description_en) = changes.description_en {
            active.description_en = Set(Some(description_en));
        }
        if let Some(icon) = changes.icon {
            active.icon = Set(icon);
        }
        if let Some(lead_price) = changes.lead_price {
            active.lead_price = Set(lead_price);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        let model = active.update(&self.db).await?;
        Ok(Service::from(model))
    }
}
