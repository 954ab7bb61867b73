//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, entities and repositories
//! - Redis cache and rate limiting counters
//! - The webhook outbox (background job queue)
//! - Unit of Work for centralized repository access

pub mod cache;
pub mod db;
pub mod repositories;
pub mod unit_of_work;
pub mod webhook;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use repositories::{
    AssignmentRepository, AssignmentStore, CityRepository, CityStore, CompanyRepository,
    CompanyStore, LeadRepository, LeadStore, ServiceRepository, ServiceStore, UserRepository,
    UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};
pub use webhook::{WebhookOutbox, WebhookQueue};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAssignmentRepository, MockCityRepository, MockCompanyRepository, MockLeadRepository,
    MockServiceRepository, MockUserRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use webhook::MockWebhookQueue;
