//! Test support: a Unit of Work over mocked repositories.

use std::sync::Arc;

use crate::infra::{
    AssignmentRepository, CityRepository, CompanyRepository, LeadRepository,
    MockAssignmentRepository, MockCityRepository, MockCompanyRepository, MockLeadRepository,
    MockServiceRepository, MockUserRepository, ServiceRepository, UnitOfWork, UserRepository,
};

/// Unit of Work whose repositories are mockall mocks. Repositories without
/// configured expectations panic when touched, which doubles as a check
/// that a code path stays away from them.
pub(crate) struct TestUow {
    pub services: Arc<MockServiceRepository>,
    pub cities: Arc<MockCityRepository>,
    pub companies: Arc<MockCompanyRepository>,
    pub leads: Arc<MockLeadRepository>,
    pub assignments: Arc<MockAssignmentRepository>,
    pub users: Arc<MockUserRepository>,
}

impl TestUow {
    pub fn new() -> Self {
        Self {
            services: Arc::new(MockServiceRepository::new()),
            cities: Arc::new(MockCityRepository::new()),
            companies: Arc::new(MockCompanyRepository::new()),
            leads: Arc::new(MockLeadRepository::new()),
            assignments: Arc::new(MockAssignmentRepository::new()),
            users: Arc::new(MockUserRepository::new()),
        }
    }

    pub fn with_services(mut self, services: MockServiceRepository) -> Self {
        self.services = Arc::new(services);
        self
    }

    pub fn with_cities(mut self, cities: MockCityRepository) -> Self {
        self.cities = Arc::new(cities);
        self
    }

    pub fn with_companies(mut self, companies: MockCompanyRepository) -> Self {
        self.companies = Arc::new(companies);
        self
    }

    pub fn with_leads(mut self, leads: MockLeadRepository) -> Self {
        self.leads = Arc::new(leads);
        self
    }

    pub fn with_assignments(mut self, assignments: MockAssignmentRepository) -> Self {
        self.assignments = Arc::new(assignments);
        self
    }
}

impl UnitOfWork for TestUow {
    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.services.clone()
    }

    fn cities(&self) -> Arc<dyn CityRepository> {
        self.cities.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyRepository> {
        self.companies.clone()
    }

    fn leads(&self) -> Arc<dyn LeadRepository> {
        self.leads.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentRepository> {
        self.assignments.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }
}
