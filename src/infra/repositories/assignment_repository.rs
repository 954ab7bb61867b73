//! Lead assignment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::lead_assignment::{self, Entity as AssignmentEntity};
use crate::domain::{Assignment, NewAssignment};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persistence for priced lead-to-company assignments.
///
/// Rows are immutable once written (financial audit trail); the only
/// mutation is removal of a mistaken assignment.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn insert(&self, assignment: NewAssignment) -> AppResult<Assignment>;

    /// Assignment history for a lead, newest first
    async fn list_for_lead(&self, lead_id: Uuid) -> AppResult<Vec<Assignment>>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Revenue counter: sum of `amount_charged` for assignments made in
    /// `[from, to)` (open-ended when `to` is `None`)
    async fn sum_charged_between(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> AppResult<Decimal>;
}

/// SeaORM-backed implementation of [`AssignmentRepository`].
#[derive(Clone)]
pub struct AssignmentStore {
    db: DatabaseConnection,
}

impl AssignmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssignmentRepository for AssignmentStore {
    async fn insert(&self, assignment: NewAssignment) -> AppResult<Assignment> {
        let active_model = lead_assignment::ActiveModel {
            id: Set(Uuid::new_v4()),
            lead_id: Set(assignment.lead_id),
            company_id: Set(assignment.company_id),
            assigned_by: Set(assignment.assigned_by),
            assigned_at: Set(Utc::now()),
            amount_charged: Set(assignment.amount_charged),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Assignment::from(model))
    }

    async fn list_for_lead(&self, lead_id: Uuid) -> AppResult<Vec<Assignment>> {
        let models = AssignmentEntity::find()
            .filter(lead_assignment::Column::LeadId.eq(lead_id))
            .order_by_desc(lead_assignment::Column::AssignedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Assignment::from).collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AssignmentEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn sum_charged_between(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> AppResult<Decimal> {
        let mut query =
            AssignmentEntity::find().filter(lead_assignment::Column::AssignedAt.gte(from));

        if let Some(to) = to {
            query = query.filter(lead_assignment::Column::AssignedAt.lt(to));
        }

        // Assignment volumes are small enough to sum in process, mirroring
        // the reporting the admin dashboard has always done.
        let models = query.all(&self.db).await?;
        let total = models
            .into_iter()
            .map(|m| m.amount_charged)
            .sum::<Decimal>();

        Ok(total)
    }
}
