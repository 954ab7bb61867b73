//! Unit of Work: centralized repository access.
//!
//! Services depend on this trait instead of individual stores so tests can
//! swap in mocked repositories wholesale. Cross-repository writes in this
//! system are deliberately independent (batch assignment has no rollback
//! across companies), so no transaction machinery is exposed here.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    AssignmentRepository, AssignmentStore, CityRepository, CityStore, CompanyRepository,
    CompanyStore, LeadRepository, LeadStore, ServiceRepository, ServiceStore, UserRepository,
    UserStore,
};

/// Registry of all repositories, for dependency injection.
pub trait UnitOfWork: Send + Sync {
    /// Service catalog repository
    fn services(&self) -> Arc<dyn ServiceRepository>;

    /// City catalog repository
    fn cities(&self) -> Arc<dyn CityRepository>;

    /// Company directory repository
    fn companies(&self) -> Arc<dyn CompanyRepository>;

    /// Lead repository
    fn leads(&self) -> Arc<dyn LeadRepository>;

    /// Assignment repository
    fn assignments(&self) -> Arc<dyn AssignmentRepository>;

    /// Staff account repository
    fn users(&self) -> Arc<dyn UserRepository>;
}

/// Concrete implementation of [`UnitOfWork`] over one database connection.
pub struct Persistence {
    service_repo: Arc<ServiceStore>,
    city_repo: Arc<CityStore>,
    company_repo: Arc<CompanyStore>,
    lead_repo: Arc<LeadStore>,
    assignment_repo: Arc<AssignmentStore>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create a new unit of work sharing the given connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            service_repo: Arc::new(ServiceStore::new(db.clone())),
            city_repo: Arc::new(CityStore::new(db.clone())),
            company_repo: Arc::new(CompanyStore::new(db.clone())),
            lead_repo: Arc::new(LeadStore::new(db.clone())),
            assignment_repo: Arc::new(AssignmentStore::new(db.clone())),
            user_repo: Arc::new(UserStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.service_repo.clone()
    }

    fn cities(&self) -> Arc<dyn CityRepository> {
        self.city_repo.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.company_repo.clone()
    }

    fn leads(&self) -> Arc<dyn LeadRepository> {
        self.lead_repo.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentRepository> {
        self.assignment_repo.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}
