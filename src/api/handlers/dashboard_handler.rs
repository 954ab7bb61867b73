//! Admin dashboard handler.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::DEFAULT_RECENT_LEADS;
use crate::domain::LeadWithService;
use crate::errors::AppResult;
use crate::services::{parallel, DashboardStats};
use crate::types::ApiResponse;

/// Dashboard payload: headline numbers plus the latest leads
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_leads: Vec<LeadWithService>,
}

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Dashboard statistics and recent leads
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "Dashboard",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stats and recent leads", body = DashboardResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardResponse>>> {
    // The two queries are independent; run them concurrently
    let (stats, recent_leads) = parallel::join2(
        state.stats_service.dashboard(),
        state.lead_service.recent(DEFAULT_RECENT_LEADS),
    )
    .await?;

    Ok(Json(ApiResponse::success(DashboardResponse {
        stats,
        recent_leads,
    })))
}
