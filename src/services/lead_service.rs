//! Lead service: intake from the public form and admin management.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Lead, LeadFilter, LeadStatus, LeadWithService, Service, SubmitLead};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{UnitOfWork, WebhookQueue};
use crate::jobs::WebhookJob;
use crate::types::{Paginated, PaginationParams};

/// Lead use cases.
#[async_trait]
pub trait LeadService: Send + Sync {
    /// Validate and persist a public form submission.
    ///
    /// On success the lead is stored with `status = new` and `source =
    /// website`, and a webhook notification is enqueued best-effort. On
    /// validation failure nothing is persisted and the complete list of
    /// violations is returned.
    async fn submit(&self, submission: SubmitLead) -> AppResult<Lead>;

    /// Lead with its resolved service (thank-you page and admin detail)
    async fn get(&self, id: Uuid) -> AppResult<LeadWithService>;

    /// Filtered, paginated admin list, newest first
    async fn list(
        &self,
        filter: LeadFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<LeadWithService>>;

    /// Most recent leads for the dashboard
    async fn recent(&self, limit: u64) -> AppResult<Vec<LeadWithService>>;

    /// Set a lead's status; any state may be set from any state
    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Lead>;

    /// Apply one status to a batch of leads in a single statement
    async fn bulk_update_status(&self, ids: Vec<Uuid>, status: LeadStatus)
        -> AppResult<Vec<Lead>>;

    async fn update_notes(&self, id: Uuid, notes: String) -> AppResult<Lead>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of LeadService using Unit of Work.
pub struct LeadManager<U: UnitOfWork> {
    uow: Arc<U>,
    webhook: Arc<dyn WebhookQueue>,
}

impl<U: UnitOfWork> LeadManager<U> {
    pub fn new(uow: Arc<U>, webhook: Arc<dyn WebhookQueue>) -> Self {
        Self { uow, webhook }
    }

    /// Embed each lead's service, resolving the catalog once per call.
    async fn with_services(&self, leads: Vec<Lead>) -> AppResult<Vec<LeadWithService>> {
        let services: HashMap<Uuid, Service> = self
            .uow
            .services()
            .list_all()
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        Ok(leads
            .into_iter()
            .map(|lead| {
                let service = lead.service_id.and_then(|id| services.get(&id).cloned());
                LeadWithService { lead, service }
            })
            .collect())
    }
}

#[async_trait]
impl<U: UnitOfWork> LeadService for LeadManager<U> {
    async fn submit(&self, submission: SubmitLead) -> AppResult<Lead> {
        let new_lead = submission.validate().map_err(AppError::RejectedLead)?;

        // The city free-text must name a city the network actually covers.
        if self
            .uow
            .cities()
            .find_active_by_name(&new_lead.city)
            .await?
            .is_none()
        {
            return Err(AppError::RejectedLead(vec![
                "Please select a city from the list".to_string(),
            ]));
        }

        let lead = self.uow.leads().insert(new_lead).await?;

        tracing::info!(lead_id = %lead.id, city = %lead.city, "Lead created");

        // Best-effort: a broken queue must never break lead intake.
        if let Err(e) = self.webhook.enqueue(WebhookJob::from(&lead)).await {
            tracing::warn!(lead_id = %lead.id, error = %e, "Failed to enqueue webhook notification");
        }

        Ok(lead)
    }

    async fn get(&self, id: Uuid) -> AppResult<LeadWithService> {
        let lead = self.uow.leads().find_by_id(id).await?.ok_or_not_found()?;

        let service = match lead.service_id {
            Some(service_id) => self.uow.services().find_by_id(service_id).await?,
            None => None,
        };

        Ok(LeadWithService { lead, service })
    }

    async fn list(
        &self,
        filter: LeadFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<LeadWithService>> {
        let (leads, total) = self.uow.leads().list(filter, page.clone()).await?;
        let data = self.with_services(leads).await?;

        Ok(Paginated::new(data, page.page, page.limit(), total))
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<LeadWithService>> {
        let leads = self.uow.leads().recent(limit).await?;
        self.with_services(leads).await
    }

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Lead> {
        self.uow.leads().update_status(id, status).await
    }

    async fn bulk_update_status(
        &self,
        ids: Vec<Uuid>,
        status: LeadStatus,
    ) -> AppResult<Vec<Lead>> {
        self.uow.leads().bulk_update_status(ids, status).await
    }

    async fn update_notes(&self, id: Uuid, notes: String) -> AppResult<Lead> {
        self.uow.leads().update_notes(id, notes).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.uow.leads().delete(id).await
    }
}
