//! Shared test fixtures: an in-memory Unit of Work and domain builders.
//!
//! The fake store implements the repository traits over mutex-guarded
//! vectors so service-level tests can drive full flows (write then read
//! back) without a database.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use lynck_api::domain::{
    Assignment, City, Company, CompanyChanges, CompanyFilter, CreateCompany, Lead, LeadFilter,
    LeadStatus, NewAssignment, NewLead, Service, ServiceChanges, User, UserRole,
};
use lynck_api::errors::{AppError, AppResult};
use lynck_api::infra::{
    AssignmentRepository, CityRepository, CompanyRepository, LeadRepository, ServiceRepository,
    UnitOfWork, UserRepository, WebhookQueue,
};
use lynck_api::jobs::WebhookJob;
use lynck_api::types::PaginationParams;

/// In-memory store backing every repository trait.
#[derive(Default)]
pub struct MemoryStore {
    pub services: Mutex<Vec<Service>>,
    pub cities: Mutex<Vec<City>>,
    pub companies: Mutex<Vec<Company>>,
    pub leads: Mutex<Vec<Lead>>,
    pub assignments: Mutex<Vec<Assignment>>,
    pub users: Mutex<Vec<User>>,
    /// Assignment inserts for these companies fail, for partial-batch tests
    pub failing_companies: Mutex<HashSet<Uuid>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_assignments_for(&self, company_id: Uuid) {
        self.failing_companies.lock().unwrap().insert(company_id);
    }
}

#[async_trait]
impl ServiceRepository for MemoryStore {
    async fn list_active(&self) -> AppResult<Vec<Service>> {
        let mut services: Vec<Service> = self
            .services
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(services)
    }

    async fn list_all(&self) -> AppResult<Vec<Service>> {
        let mut services = self.services.lock().unwrap().clone();
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(services)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Service>> {
        Ok(self
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<Service>> {
        Ok(self
            .services
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.slug == slug && s.is_active)
            .cloned())
    }

    async fn update(&self, id: Uuid, changes: ServiceChanges) -> AppResult<Service> {
        let mut services = self.services.lock().unwrap();
        let service = services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(name) = changes.name {
            service.name = name;
        }
        if let Some(name_en) = changes.name_en {
            service.name_en = name_en;
        }
        if let Some(description) = changes.description {
            service.description = Some(description);
        }
        if let Some(description_en) = changes.description_en {
            service.description_en = Some(description_en);
        }
        if let Some(icon) = changes.icon {
            service.icon = icon;
        }
        if let Some(lead_price) = changes.lead_price {
            service.lead_price = lead_price;
        }
        if let Some(is_active) = changes.is_active {
            service.is_active = is_active;
        }

        Ok(service.clone())
    }
}

#[async_trait]
impl CityRepository for MemoryStore {
    async fn list_active(&self) -> AppResult<Vec<City>> {
        let mut cities: Vec<City> = self
            .cities
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn list_all(&self) -> AppResult<Vec<City>> {
        let mut cities = self.cities.lock().unwrap().clone();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cities)
    }

    async fn find_active_by_name(&self, name: &str) -> AppResult<Option<City>> {
        Ok(self
            .cities
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name && c.is_active)
            .cloned())
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn list(&self, filter: CompanyFilter) -> AppResult<Vec<Company>> {
        let mut companies: Vec<Company> = self
            .companies
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                let search_ok = match &filter.search {
                    Some(term) => {
                        let term = term.to_lowercase();
                        c.name.to_lowercase().contains(&term)
                            || c.email.to_lowercase().contains(&term)
                            || c.phone.to_lowercase().contains(&term)
                    }
                    None => true,
                };
                let active_ok = filter.is_active.map(|a| c.is_active == a).unwrap_or(true);
                search_ok && active_ok
            })
            .cloned()
            .collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn list_active(&self) -> AppResult<Vec<Company>> {
        CompanyRepository::list(
            self,
            CompanyFilter {
                search: None,
                is_active: Some(true),
            },
        )
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create(&self, company: CreateCompany) -> AppResult<Company> {
        let created = Company {
            id: Uuid::new_v4(),
            name: company.name,
            contact_person: company.contact_person,
            email: company.email,
            phone: company.phone,
            whatsapp: company.whatsapp,
            service_ids: company.service_ids,
            cities: company.cities,
            is_active: company.is_active,
            created_at: Utc::now(),
        };
        self.companies.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: Uuid, changes: CompanyChanges) -> AppResult<Company> {
        let mut companies = self.companies.lock().unwrap();
        let company = companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(AppError::NotFound)?;

        if let Some(name) = changes.name {
            company.name = name;
        }
        if let Some(contact_person) = changes.contact_person {
            company.contact_person = Some(contact_person);
        }
        if let Some(email) = changes.email {
            company.email = email;
        }
        if let Some(phone) = changes.phone {
            company.phone = phone;
        }
        if let Some(whatsapp) = changes.whatsapp {
            company.whatsapp = Some(whatsapp);
        }
        if let Some(service_ids) = changes.service_ids {
            company.service_ids = service_ids;
        }
        if let Some(cities) = changes.cities {
            company.cities = cities;
        }
        if let Some(is_active) = changes.is_active {
            company.is_active = is_active;
        }

        Ok(company.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut companies = self.companies.lock().unwrap();
        let before = companies.len();
        companies.retain(|c| c.id != id);
        if companies.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl LeadRepository for MemoryStore {
    async fn insert(&self, new_lead: NewLead) -> AppResult<Lead> {
        let lead = Lead {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: new_lead.name,
            phone: new_lead.phone,
            email: new_lead.email,
            city: new_lead.city,
            plz: new_lead.plz,
            service_id: new_lead.service_id,
            service_details: new_lead.service_details,
            timeline: new_lead.timeline,
            status: LeadStatus::New,
            source: "website".to_string(),
            admin_notes: None,
        };
        self.leads.lock().unwrap().push(lead.clone());
        Ok(lead)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Lead>> {
        Ok(self
            .leads
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn list(
        &self,
        filter: LeadFilter,
        page: PaginationParams,
    ) -> AppResult<(Vec<Lead>, u64)> {
        let mut leads: Vec<Lead> = self
            .leads
            .lock()
            .unwrap()
            .iter()
            .filter(|l| {
                let search_ok = match &filter.search {
                    Some(term) => {
                        let term = term.to_lowercase();
                        l.name.to_lowercase().contains(&term)
                            || l.phone.to_lowercase().contains(&term)
                            || l.email
                                .as_deref()
                                .map(|e| e.to_lowercase().contains(&term))
                                .unwrap_or(false)
                    }
                    None => true,
                };
                search_ok
                    && filter.service_id.map(|s| l.service_id == Some(s)).unwrap_or(true)
                    && filter.city.as_deref().map(|c| l.city == c).unwrap_or(true)
                    && filter.status.map(|s| l.status == s).unwrap_or(true)
                    && filter.date_from.map(|f| l.created_at >= f).unwrap_or(true)
                    && filter.date_to.map(|t| l.created_at <= t).unwrap_or(true)
            })
            .cloned()
            .collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = leads.len() as u64;
        let page_data: Vec<Lead> = leads
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();

        Ok((page_data, total))
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<Lead>> {
        let mut leads = self.leads.lock().unwrap().clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        leads.truncate(limit as usize);
        Ok(leads)
    }

    async fn update_status(&self, id: Uuid, status: LeadStatus) -> AppResult<Lead> {
        let mut leads = self.leads.lock().unwrap();
        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(AppError::NotFound)?;
        lead.status = status;
        Ok(lead.clone())
    }

    async fn bulk_update_status(
        &self,
        ids: Vec<Uuid>,
        status: LeadStatus,
    ) -> AppResult<Vec<Lead>> {
        let mut leads = self.leads.lock().unwrap();
        let mut updated = Vec::new();
        for lead in leads.iter_mut() {
            if ids.contains(&lead.id) {
                lead.status = status;
                updated.push(lead.clone());
            }
        }
        Ok(updated)
    }

    async fn update_notes(&self, id: Uuid, notes: String) -> AppResult<Lead> {
        let mut leads = self.leads.lock().unwrap();
        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(AppError::NotFound)?;
        lead.admin_notes = Some(notes);
        Ok(lead.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut leads = self.leads.lock().unwrap();
        let before = leads.len();
        leads.retain(|l| l.id != id);
        if leads.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> AppResult<u64> {
        let count = self
            .leads
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.created_at >= from && to.map(|t| l.created_at < t).unwrap_or(true))
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl AssignmentRepository for MemoryStore {
    async fn insert(&self, assignment: NewAssignment) -> AppResult<Assignment> {
        if self
            .failing_companies
            .lock()
            .unwrap()
            .contains(&assignment.company_id)
        {
            return Err(AppError::internal("insert failed"));
        }

        let created = Assignment {
            id: Uuid::new_v4(),
            lead_id: assignment.lead_id,
            company_id: assignment.company_id,
            assigned_by: assignment.assigned_by,
            assigned_at: Utc::now(),
            amount_charged: assignment.amount_charged,
        };
        self.assignments.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_for_lead(&self, lead_id: Uuid) -> AppResult<Vec<Assignment>> {
        let mut assignments: Vec<Assignment> = self
            .assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.lead_id == lead_id)
            .cloned()
            .collect();
        assignments.sort_by(|a, b| b.assigned_at.cmp(&a.assigned_at));
        Ok(assignments)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut assignments = self.assignments.lock().unwrap();
        let before = assignments.len();
        assignments.retain(|a| a.id != id);
        if assignments.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn sum_charged_between(
        &self,
        from: DateTime<Utc>,
        to: Option<DateTime<Utc>>,
    ) -> AppResult<Decimal> {
        let total = self
            .assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.assigned_at >= from && to.map(|t| a.assigned_at < t).unwrap_or(true))
            .map(|a| a.amount_charged)
            .sum();
        Ok(total)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: String,
    ) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            role: UserRole::from(role.as_str()),
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

/// Unit of Work over the in-memory store.
pub struct MemoryUnitOfWork {
    pub store: Arc<MemoryStore>,
}

impl MemoryUnitOfWork {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl UnitOfWork for MemoryUnitOfWork {
    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.store.clone()
    }

    fn cities(&self) -> Arc<dyn CityRepository> {
        self.store.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.store.clone()
    }

    fn leads(&self) -> Arc<dyn LeadRepository> {
        self.store.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentRepository> {
        self.store.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.store.clone()
    }
}

/// Webhook queue fake that records enqueued jobs.
#[derive(Default)]
pub struct RecordingOutbox {
    pub jobs: Mutex<Vec<WebhookJob>>,
    pub fail: bool,
}

impl RecordingOutbox {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            jobs: Mutex::new(vec![]),
            fail: true,
        })
    }
}

#[async_trait]
impl WebhookQueue for RecordingOutbox {
    async fn enqueue(&self, job: WebhookJob) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Queue("queue unavailable".to_string()));
        }
        self.jobs.lock().unwrap().push(job);
        Ok(())
    }
}

// =============================================================================
// Domain builders
// =============================================================================

pub fn service(name: &str, slug: &str, price: i64) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: name.to_string(),
        name_en: name.to_string(),
        slug: slug.to_string(),
        description: None,
        description_en: None,
        icon: "flame".to_string(),
        lead_price: Decimal::from(price),
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn city(name: &str) -> City {
    City {
        id: Uuid::new_v4(),
        name: name.to_string(),
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn company(name: &str, service_ids: Vec<Uuid>, cities: Vec<&str>) -> Company {
    Company {
        id: Uuid::new_v4(),
        name: name.to_string(),
        contact_person: None,
        email: format!("{}@example.de", name.to_lowercase().replace(' ', "-")),
        phone: "+4930123456".to_string(),
        whatsapp: None,
        service_ids,
        cities: cities.into_iter().map(String::from).collect(),
        is_active: true,
        created_at: Utc::now(),
    }
}
