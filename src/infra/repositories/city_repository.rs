//! City catalog repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::city::{self, Entity as CityEntity};
use crate::domain::City;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to the covered-cities list.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Active cities, ordered by name ascending
    async fn list_active(&self) -> AppResult<Vec<City>>;

    /// All cities including deactivated ones, ordered by name ascending
    async fn list_all(&self) -> AppResult<Vec<City>>;

    /// Look up an active city by its exact name (lead intake check)
    async fn find_active_by_name(&self, name: &str) -> AppResult<Option<City>>;
}

/// SeaORM-backed implementation of [`CityRepository`].
#[derive(Clone)]
pub struct CityStore {
    db: DatabaseConnection,
}

impl CityStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CityRepository for CityStore {
    async fn list_active(&self) -> AppResult<Vec<City>> {
        let models = CityEntity::find()
            .filter(city::Column::IsActive.eq(true))
            .order_by_asc(city::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(City::from).collect())
    }

    async fn list_all(&self) -> AppResult<Vec<City>> {
        let models = CityEntity::find()
            .order_by_asc(city::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(City::from).collect())
    }

    async fn find_active_by_name(&self, name: &str) -> AppResult<Option<City>> {
        let model = CityEntity::find()
            .filter(city::Column::Name.eq(name))
            .filter(city::Column::IsActive.eq(true))
            .one(&self.db)
            .await?;

        Ok(model.map(City::from))
    }
}
