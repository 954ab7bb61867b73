//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Cache, Database, WebhookQueue};
use crate::services::{
    AssignmentService, AuthService, CatalogService, CompanyService, LeadService, ServiceContainer,
    Services, StatsService,
};

/// Application state containing all services (DI container).
///
/// Use `from_config()` for recommended initialization with full
/// ServiceContainer support.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Catalog service (services and cities)
    pub catalog_service: Arc<dyn CatalogService>,
    /// Company directory service
    pub company_service: Arc<dyn CompanyService>,
    /// Lead service
    pub lead_service: Arc<dyn LeadService>,
    /// Matching and assignment service
    pub assignment_service: Arc<dyn AssignmentService>,
    /// Dashboard statistics service
    pub stats_service: Arc<dyn StatsService>,
    /// Redis cache
    pub cache: Arc<Cache>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from infrastructure and config.
    ///
    /// This is the recommended way to create AppState as it uses
    /// the ServiceContainer for centralized service wiring.
    pub fn from_config(
        database: Arc<Database>,
        cache: Arc<Cache>,
        config: crate::config::Config,
        webhook: Arc<dyn WebhookQueue>,
    ) -> Self {
        let container = Services::from_connection(database.get_connection(), config, webhook);

        Self {
            auth_service: container.auth(),
            catalog_service: container.catalog(),
            company_service: container.companies(),
            lead_service: container.leads(),
            assignment_service: container.assignments(),
            stats_service: container.stats(),
            cache,
            database,
        }
    }

    /// Create new application state with manually injected services.
    ///
    /// Used by tests to swap in mock services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        company_service: Arc<dyn CompanyService>,
        lead_service: Arc<dyn LeadService>,
        assignment_service: Arc<dyn AssignmentService>,
        stats_service: Arc<dyn StatsService>,
        cache: Arc<Cache>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            company_service,
            lead_service,
            assignment_service,
            stats_service,
            cache,
            database,
        }
    }
}
