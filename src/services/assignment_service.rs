//! Assignment service: matching companies to leads and recording priced
//! assignments.
//!
//! This is the one matcher implementation; the single- and bulk-assignment
//! flows in the admin UI both go through it.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::DEFAULT_LEAD_PRICE_UNITS;
use crate::domain::{
    AssignmentFailure, AssignmentWithCompany, BatchAssignment, Company, CompanyContact, Lead,
    NewAssignment,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::services::parallel;

/// Matching and assignment use cases.
#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Active companies whose declared services and cities both cover the
    /// lead, ordered by name ascending (case-insensitive).
    ///
    /// An empty intersection is a normal empty result, not an error. A lead
    /// without a service matches nothing.
    async fn matching_companies(&self, lead_id: Uuid) -> AppResult<Vec<Company>>;

    /// Record one assignment per requested company.
    ///
    /// The company set is de-duplicated first. Each insert is independent:
    /// one failure does not roll back the others, and the outcome lists
    /// which companies succeeded and which failed. The lead's status is not
    /// touched; status transitions are a separate call.
    async fn assign(
        &self,
        lead_id: Uuid,
        company_ids: Vec<Uuid>,
        assigned_by: String,
    ) -> AppResult<BatchAssignment>;

    /// Assignment history for a lead, newest first, with company contacts
    async fn assignments_for_lead(&self, lead_id: Uuid) -> AppResult<Vec<AssignmentWithCompany>>;

    /// Remove a mistaken assignment
    async fn remove(&self, assignment_id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AssignmentService using Unit of Work.
pub struct AssignmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AssignmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Price snapshot for a lead: the service's configured per-lead price,
    /// or the flat fallback when the lead has no resolvable service.
    async fn price_for(&self, lead: &Lead) -> AppResult<Decimal> {
        let configured = match lead.service_id {
            Some(service_id) => self
                .uow
                .services()
                .find_by_id(service_id)
                .await?
                .map(|s| s.lead_price),
            None => None,
        };

        Ok(configured.unwrap_or_else(|| Decimal::from(DEFAULT_LEAD_PRICE_UNITS)))
    }
}

#[async_trait]
impl<U: UnitOfWork> AssignmentService for AssignmentManager<U> {
    async fn matching_companies(&self, lead_id: Uuid) -> AppResult<Vec<Company>> {
        let lead = self
            .uow
            .leads()
            .find_by_id(lead_id)
            .await?
            .ok_or_not_found()?;

        // Without a service there is nothing to intersect on.
        let Some(service_id) = lead.service_id else {
            return Ok(vec![]);
        };

        let mut matches: Vec<Company> = self
            .uow
            .companies()
            .list_active()
            .await?
            .into_iter()
            .filter(|company| company.matches(service_id, &lead.city))
            .collect();

        matches.sort_by_key(|company| company.name.to_lowercase());

        Ok(matches)
    }

    async fn assign(
        &self,
        lead_id: Uuid,
        company_ids: Vec<Uuid>,
        assigned_by: String,
    ) -> AppResult<BatchAssignment> {
        let lead = self
            .uow
            .leads()
            .find_by_id(lead_id)
            .await?
            .ok_or_not_found()?;

        // De-duplicate while keeping the caller's order; double-charging a
        // company for the same lead helps nobody.
        let mut seen = HashSet::new();
        let company_ids: Vec<Uuid> = company_ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();

        if company_ids.is_empty() {
            return Err(AppError::bad_request("No companies selected"));
        }

        let amount_charged = self.price_for(&lead).await?;

        let mut created = Vec::new();
        let mut failed = Vec::new();

        for company_id in company_ids {
            let assignment = NewAssignment {
                lead_id,
                company_id,
                assigned_by: assigned_by.clone(),
                amount_charged,
            };

            match self.uow.assignments().insert(assignment).await {
                Ok(assignment) => created.push(assignment),
                Err(e) => {
                    tracing::error!(
                        lead_id = %lead_id,
                        company_id = %company_id,
                        error = %e,
                        "Assignment insert failed"
                    );
                    failed.push(AssignmentFailure {
                        company_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            lead_id = %lead_id,
            created = created.len(),
            failed = failed.len(),
            "Lead assigned"
        );

        Ok(BatchAssignment { created, failed })
    }

    async fn assignments_for_lead(&self, lead_id: Uuid) -> AppResult<Vec<AssignmentWithCompany>> {
        let assignments = self.uow.assignments().list_for_lead(lead_id).await?;

        let companies = self.uow.companies();
        let lookups: Vec<_> = assignments
            .iter()
            .map(|assignment| companies.find_by_id(assignment.company_id))
            .collect();
        let resolved = parallel::join_all(lookups).await?;

        Ok(assignments
            .into_iter()
            .zip(resolved)
            .map(|(assignment, company)| AssignmentWithCompany {
                assignment,
                company: company.map(CompanyContact::from),
            })
            .collect())
    }

    async fn remove(&self, assignment_id: Uuid) -> AppResult<()> {
        self.uow.assignments().delete(assignment_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::{Assignment, LeadStatus, Timeline};
    use crate::infra::{
        MockAssignmentRepository, MockCompanyRepository, MockLeadRepository,
        MockServiceRepository,
    };
    use crate::services::testing::TestUow;

    fn lead(id: Uuid, service_id: Option<Uuid>, city: &str) -> Lead {
        Lead {
            id,
            created_at: Utc::now(),
            name: "Max Muster".to_string(),
            phone: "+4915112345678".to_string(),
            email: None,
            city: city.to_string(),
            plz: "10115".to_string(),
            service_id,
            service_details: "Heizung ausgefallen, bitte schnell helfen".to_string(),
            timeline: Timeline::Sofort,
            status: LeadStatus::New,
            source: "website".to_string(),
            admin_notes: None,
        }
    }

    fn company(name: &str, service_ids: Vec<Uuid>, cities: Vec<&str>, active: bool) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: name.to_string(),
            contact_person: None,
            email: "info@example.de".to_string(),
            phone: "+4930123456".to_string(),
            whatsapp: None,
            service_ids,
            cities: cities.into_iter().map(String::from).collect(),
            is_active: active,
            created_at: Utc::now(),
        }
    }

    fn assignment(new: &NewAssignment) -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            lead_id: new.lead_id,
            company_id: new.company_id,
            assigned_by: new.assigned_by.clone(),
            assigned_at: Utc::now(),
            amount_charged: new.amount_charged,
        }
    }

    #[tokio::test]
    async fn matcher_filters_on_all_three_conditions_and_orders_by_name() {
        let lead_id = Uuid::new_v4();
        let service_id = Uuid::new_v4();

        let mut leads = MockLeadRepository::new();
        leads
            .expect_find_by_id()
            .with(eq(lead_id))
            .returning(move |id| Ok(Some(lead(id, Some(service_id), "Berlin"))));

        let mut companies = MockCompanyRepository::new();
        companies.expect_list_active().returning(move || {
            Ok(vec![
                company("zentral heizbau", vec![service_id], vec!["Berlin"], true),
                company("Anders & Sohn", vec![service_id], vec!["Berlin"], true),
                company("Bayern Wärme", vec![service_id], vec!["München"], true),
                company("Fremdgewerk GmbH", vec![Uuid::new_v4()], vec!["Berlin"], true),
            ])
        });

        let uow = TestUow::new().with_leads(leads).with_companies(companies);
        let service = AssignmentManager::new(Arc::new(uow));

        let matches = service.matching_companies(lead_id).await.unwrap();
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anders & Sohn", "zentral heizbau"]);
    }

    #[tokio::test]
    async fn matcher_returns_not_found_for_unknown_lead() {
        let mut leads = MockLeadRepository::new();
        leads.expect_find_by_id().returning(|_| Ok(None));

        let uow = TestUow::new().with_leads(leads);
        let service = AssignmentManager::new(Arc::new(uow));

        let result = service.matching_companies(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn assign_uses_fallback_price_when_the_service_is_unknown() {
        let lead_id = Uuid::new_v4();
        let service_id = Uuid::new_v4();
        let company_id = Uuid::new_v4();

        let mut leads = MockLeadRepository::new();
        leads
            .expect_find_by_id()
            .returning(move |id| Ok(Some(lead(id, Some(service_id), "Berlin"))));

        // The lead still points at a service id the catalog no longer knows
        let mut services = MockServiceRepository::new();
        services.expect_find_by_id().returning(|_| Ok(None));

        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_insert()
            .withf(|new| new.amount_charged == Decimal::from(DEFAULT_LEAD_PRICE_UNITS))
            .times(1)
            .returning(|new| Ok(assignment(&new)));

        let uow = TestUow::new()
            .with_leads(leads)
            .with_services(services)
            .with_assignments(assignments);
        let service = AssignmentManager::new(Arc::new(uow));

        let outcome = service
            .assign(lead_id, vec![company_id], "admin".to_string())
            .await
            .unwrap();
        assert!(outcome.is_complete());
        assert_eq!(outcome.created.len(), 1);
    }

    #[tokio::test]
    async fn assign_deduplicates_the_company_batch() {
        let lead_id = Uuid::new_v4();
        let company_id = Uuid::new_v4();

        let mut leads = MockLeadRepository::new();
        leads
            .expect_find_by_id()
            .returning(move |id| Ok(Some(lead(id, None, "Berlin"))));

        let mut assignments = MockAssignmentRepository::new();
        assignments
            .expect_insert()
            .times(1)
            .returning(|new| Ok(assignment(&new)));

        let uow = TestUow::new().with_leads(leads).with_assignments(assignments);
        let service = AssignmentManager::new(Arc::new(uow));

        let outcome = service
            .assign(
                lead_id,
                vec![company_id, company_id, company_id],
                "admin".to_string(),
            )
            .await
            .unwrap();
        assert_eq!(outcome.created.len(), 1);
    }
}
