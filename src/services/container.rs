//! Service Container - Centralized service access.
//!
//! Wires all application services over one Unit of Work and exposes them
//! behind trait objects, plus parallel-execution utilities for independent
//! queries (the dashboard runs its counters concurrently).

use std::future::Future;
use std::sync::Arc;

use super::{
    AssignmentService, AuthService, CatalogService, CompanyService, LeadService, StatsService,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Persistence, WebhookQueue};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get company directory service
    fn companies(&self) -> Arc<dyn CompanyService>;

    /// Get lead service
    fn leads(&self) -> Arc<dyn LeadService>;

    /// Get assignment service
    fn assignments(&self) -> Arc<dyn AssignmentService>;

    /// Get dashboard statistics service
    fn stats(&self) -> Arc<dyn StatsService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    catalog_service: Arc<dyn CatalogService>,
    company_service: Arc<dyn CompanyService>,
    lead_service: Arc<dyn LeadService>,
    assignment_service: Arc<dyn AssignmentService>,
    stats_service: Arc<dyn StatsService>,
}

impl Services {
    /// Create a new service container with all services initialized
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        company_service: Arc<dyn CompanyService>,
        lead_service: Arc<dyn LeadService>,
        assignment_service: Arc<dyn AssignmentService>,
        stats_service: Arc<dyn StatsService>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            company_service,
            lead_service,
            assignment_service,
            stats_service,
        }
    }

    /// Create service container from database connection, config and the
    /// webhook outbox
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: Config,
        webhook: Arc<dyn WebhookQueue>,
    ) -> Self {
        use super::{
            AssignmentManager, Authenticator, CatalogManager, CompanyManager, LeadManager,
            StatsManager,
        };

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), config)),
            catalog_service: Arc::new(CatalogManager::new(uow.clone())),
            company_service: Arc::new(CompanyManager::new(uow.clone())),
            lead_service: Arc::new(LeadManager::new(uow.clone(), webhook)),
            assignment_service: Arc::new(AssignmentManager::new(uow.clone())),
            stats_service: Arc::new(StatsManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn companies(&self) -> Arc<dyn CompanyService> {
        self.company_service.clone()
    }

    fn leads(&self) -> Arc<dyn LeadService> {
        self.lead_service.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentService> {
        self.assignment_service.clone()
    }

    fn stats(&self) -> Arc<dyn StatsService> {
        self.stats_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// Both operations run concurrently and the function returns when both
    /// complete. If either operation fails, the error is returned.
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute three independent async operations in parallel.
    pub async fn join3<F1, F2, F3, T1, T2, T3>(f1: F1, f2: F2, f3: F3) -> AppResult<(T1, T2, T3)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
    {
        try_join!(f1, f2, f3)
    }

    /// Execute four independent async operations in parallel.
    pub async fn join4<F1, F2, F3, F4, T1, T2, T3, T4>(
        f1: F1,
        f2: F2,
        f3: F3,
        f4: F4,
    ) -> AppResult<(T1, T2, T3, T4)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
        F3: Future<Output = AppResult<T3>>,
        F4: Future<Output = AppResult<T4>>,
    {
        try_join!(f1, f2, f3, f4)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// All operations must return the same type. Results are returned in
    /// the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parallel_join2() {
        async fn op1() -> AppResult<i32> {
            Ok(1)
        }
        async fn op2() -> AppResult<i32> {
            Ok(2)
        }

        let (a, b) = parallel::join2(op1(), op2()).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_parallel_join_all() {
        let futures: Vec<_> = (0..5)
            .map(|i| async move { Ok(i) as AppResult<i32> })
            .collect();
        let results = parallel::join_all(futures).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_parallel_join_all_fails_fast_on_error() {
        let futures = vec![
            Box::pin(async { Ok(1) as AppResult<i32> })
                as std::pin::Pin<Box<dyn Future<Output = AppResult<i32>>>>,
            Box::pin(async { Err(crate::errors::AppError::internal("boom")) }),
        ];
        assert!(parallel::join_all(futures).await.is_err());
    }
}
