//! Dashboard statistics service.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use crate::services::parallel;

/// Headline numbers for the admin dashboard. Day and week windows include
/// the previous period so the UI can show trends.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub leads_today: u64,
    pub leads_yesterday: u64,
    pub leads_this_week: u64,
    pub leads_last_week: u64,
    pub active_companies: u64,
    pub revenue_this_week: Decimal,
    pub revenue_last_week: Decimal,
}

/// Dashboard use cases.
#[async_trait]
pub trait StatsService: Send + Sync {
    async fn dashboard(&self) -> AppResult<DashboardStats>;
}

/// Concrete implementation of StatsService using Unit of Work.
pub struct StatsManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StatsManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

/// Midnight (UTC) of the given instant's date.
fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
}

#[async_trait]
impl<U: UnitOfWork> StatsService for StatsManager<U> {
    async fn dashboard(&self) -> AppResult<DashboardStats> {
        let now = Utc::now();
        let today = start_of_day(now);
        let yesterday = today - Duration::days(1);
        // Weeks start on Sunday, as the dashboard has always reported them
        let week_start = today - Duration::days(now.weekday().num_days_from_sunday() as i64);
        let last_week_start = week_start - Duration::days(7);

        let leads = self.uow.leads();
        let (leads_today, leads_yesterday, leads_this_week, leads_last_week) = parallel::join4(
            leads.count_created_between(today, None),
            leads.count_created_between(yesterday, Some(today)),
            leads.count_created_between(week_start, None),
            leads.count_created_between(last_week_start, Some(week_start)),
        )
        .await?;

        let assignments = self.uow.assignments();
        let (active_companies, revenue_this_week, revenue_last_week) = parallel::join3(
            async {
                let companies = self.uow.companies().list_active().await?;
                Ok::<_, crate::errors::AppError>(companies.len() as u64)
            },
            assignments.sum_charged_between(week_start, None),
            assignments.sum_charged_between(last_week_start, Some(week_start)),
        )
        .await?;

        Ok(DashboardStats {
            leads_today,
            leads_yesterday,
            leads_this_week,
            leads_last_week,
            active_companies,
            revenue_this_week,
            revenue_last_week,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn start_of_day_truncates_to_midnight() {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 17, 42, 13).unwrap();
        let midnight = start_of_day(at);
        assert_eq!(midnight, Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap());
    }
}
