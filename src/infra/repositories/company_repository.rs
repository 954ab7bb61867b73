//! Partner company repository.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::company::{self, Entity as CompanyEntity};
use crate::domain::{Company, CompanyChanges, CompanyFilter, CreateCompany};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// CRUD access to the company directory.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Companies matching the admin table filter, ordered by name ascending
    async fn list(&self, filter: CompanyFilter) -> AppResult<Vec<Company>>;

    /// All active companies (matcher input), ordered by name ascending
    async fn list_active(&self) -> AppResult<Vec<Company>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>>;

    async fn create(&self, company: CreateCompany) -> AppResult<Company>;

    async fn update(&self, id: Uuid, changes: CompanyChanges) -> AppResult<Company>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`CompanyRepository`].
#[derive(Clone)]
pub struct CompanyStore {
    db: DatabaseConnection,
}

impl CompanyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for CompanyStore {
    async fn list(&self, filter: CompanyFilter) -> AppResult<Vec<Company>> {
        let mut condition = Condition::all();

        if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            condition = condition.add(
                Condition::any()
                    .add(Expr::col(company::Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(company::Column::Email).ilike(pattern.clone()))
                    .add(Expr::col(company::Column::Phone).ilike(pattern)),
            );
        }

        if let Some(is_active) = filter.is_active {
            condition = condition.add(company::Column::IsActive.eq(is_active));
        }

        let models = CompanyEntity::find()
            .filter(condition)
            .order_by_asc(company::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn list_active(&self) -> AppResult<Vec<Company>> {
        let models = CompanyEntity::find()
            .filter(company::Column::IsActive.eq(true))
            .order_by_asc(company::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        let model = CompanyEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Company::from))
    }

    async fn create(&self, company: CreateCompany) -> AppResult<Company> {
        let active_model = company::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(company.name),
            contact_person: Set(company.contact_person),
            email: Set(company.email),
            phone: Set(company.phone),
            whatsapp: Set(company.whatsapp),
            service_ids: Set(company.service_ids),
            cities: Set(company.cities),
            is_active: Set(company.is_active),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Company::from(model))
    }

    async fn update(&self, id: Uuid, changes: CompanyChanges) -> AppResult<Company> {
        let model = CompanyEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: company::ActiveModel = model.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(contact_person) = changes.contact_person {
            active.contact_person = Set(Some(contact_person));
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(whatsapp) = changes.whatsapp {
            active.whatsapp = Set(Some(whatsapp));
        }
        if let Some(service_ids) = changes.service_ids {
            active.service_ids = Set(service_ids);
        }
        if let Some(cities) = changes.cities {
            active.cities = Set(cities);
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        let model = active.update(&self.db).await?;
        Ok(Company::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CompanyEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
