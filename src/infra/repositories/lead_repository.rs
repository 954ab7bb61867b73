//! Lead repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::lead::{self, Entity as LeadEntity};
use crate::config::LEAD_SOURCE_WEBSITE;
use crate::domain::{Lead, LeadFilter, LeadStatus, NewLead};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence for customer service requests.
///
/// `id`, `created_at` and `source` are fixed at insert; only `status` and
/// `admin_notes` have dedicated mutators.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Persist a validated submission with a fresh id, `status = new` and
    /// `source = website`.
    async fn insert(&self, lead: NewLead) -> AppResult<Lead>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Lead>>;

    /// Filtered page of leads ordered `created_at` desc, plus total count
    async fn list(&self, filter: LeadFilter, page: PaginationParams)
        -> AppResult<(Vec<Lead>, u64)>;

    /// Most recent leads for the dashboard
    async fn recent(&self, limit: u64) -> AppResult<Vec<Lead>>;

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Lead>;

    /// One `UPDATE ... WHERE id IN (...)` over the whole batch; returns the
    /// rows as updated
    async fn bulk_update_status(&self, ids: Vec<Uuid>, status: LeadStatus)
        -> AppResult<Vec<Lead>>;

    async fn update_notes(&self, id: Uuid, notes: String) -> AppResult<Lead>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Dashboard counter: leads created in `[from, to)` (open-ended when
    /// `to` is `None`)
    async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> AppResult<u64>;
}

/// SeaORM-backed implementation of [`LeadRepository`].
#[derive(Clone)]
pub struct LeadStore {
    db: DatabaseConnection,
}

impl LeadStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn filter_condition(filter: LeadFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(search) = filter.search.filter(|s| !s.trim().is_empty()) {
            let pattern = format!("%{}%", search.trim());
            condition = condition.add(
                Condition::any()
                    .add(Expr::col(lead::Column::Name).ilike(pattern.clone()))
                    .add(Expr::col(lead::Column::Phone).ilike(pattern.clone()))
                    .add(Expr::col(lead::Column::Email).ilike(pattern)),
            );
        }
        if let Some(service_id) = filter.service_id {
            condition = condition.add(lead::Column::ServiceId.eq(service_id));
        }
        if let Some(city) = filter.city {
            condition = condition.add(lead::Column::City.eq(city));
        }
        if let Some(status) = filter.status {
            condition = condition.add(lead::Column::Status.eq(status.as_str()));
        }
        if let Some(date_from) = filter.date_from {
            condition = condition.add(lead::Column::CreatedAt.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            condition = condition.add(lead::Column::CreatedAt.lte(date_to));
        }

        condition
    }
}

#[async_trait]
impl LeadRepository for LeadStore {
    async fn insert(&self, new_lead: NewLead) -> AppResult<Lead> {
        let active_model = lead::ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now()),
            name: Set(new_lead.name),
            phone: Set(new_lead.phone),
            email: Set(new_lead.email),
            city: Set(new_lead.city),
            plz: Set(new_lead.plz),
            service_id: Set(new_lead.service_id),
            service_details: Set(new_lead.service_details),
            timeline: Set(new_lead.timeline.as_str().to_string()),
            status: Set(LeadStatus::New.as_str().to_string()),
            source: Set(LEAD_SOURCE_WEBSITE.to_string()),
            admin_notes: Set(None),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Lead::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Lead>> {
        let model = LeadEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Lead::from))
    }

    async fn list(
        &self,
        filter: LeadFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<Lead>, u64)> {
        let query = LeadEntity::find()
            .filter(Self::filter_condition(filter))
            .order_by_desc(lead::Column::CreatedAt);

        let paginator = query.paginate(&self.db, page.limit());
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page.saturating_sub(1)).await?;

        Ok((models.into_iter().map(Lead::from).collect(), total))
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<Lead>> {
        let models = LeadEntity::find()
            .order_by_desc(lead::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Lead::from).collect())
    }

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Lead> {
        let model = LeadEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: lead::ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());

        let model = active.update(&self.db).await?;
        Ok(Lead::from(model))
    }

    async fn bulk_update_status(
        &self,
        ids: Vec<Uuid>,
        status: LeadStatus,
    ) -> AppResult<Vec<Lead>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        LeadEntity::update_many()
            .col_expr(lead::Column::Status, Expr::value(status.as_str()))
            .filter(lead::Column::Id.is_in(ids.clone()))
            .exec(&self.db)
            .await?;

        let models = LeadEntity::find()
            .filter(lead::Column::Id.is_in(ids))
            .order_by_desc(lead::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Lead::from).collect())
    }

    async fn update_notes(&self, id: Uuid, notes: String) -> AppResult<Lead> {
        let model = LeadEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: lead::ActiveModel = model.into();
        active.admin_notes = Set(Some(notes));

        let model = active.update(&self.db).await?;
        Ok(Lead::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = LeadEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> AppResult<u64> {
        let mut query = LeadEntity::find().filter(lead::Column::CreatedAt.gte(from));

        if let Some(to) = to {
            query = query.filter(lead::Column::CreatedAt.lt(to));
        }

        let count = query.count(&self.db).await?;
        Ok(count)
    }
}
