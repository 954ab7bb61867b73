//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod assignment_repository;
mod city_repository;
mod company_repository;
pub(crate) mod entities;
mod lead_repository;
mod service_repository;
mod user_repository;

pub use assignment_repository::{AssignmentRepository, AssignmentStore};
pub use city_repository::{CityRepository, CityStore};
pub use company_repository::{CompanyRepository, CompanyStore};
pub use lead_repository::{LeadRepository, LeadStore};
pub use service_repository::{ServiceRepository, ServiceStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use city_repository::MockCityRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use company_repository::MockCompanyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use lead_repository::MockLeadRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use service_repository::MockServiceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
