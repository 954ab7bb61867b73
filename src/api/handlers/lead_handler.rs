//! Admin lead management handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{delete, get, patch, post},
    Extension, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{
    AssignmentWithCompany, BatchAssignment, Company, Lead, LeadFilter, LeadStatus,
    LeadWithService,
};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created, NoContent, Paginated, PaginationParams};

/// Query parameters of the admin leads table
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeadListQuery {
    /// Case-insensitive substring match over name/phone/email
    pub search: Option<String>,
    /// Filter by service id
    pub service: Option<Uuid>,
    /// Filter by exact city name
    pub city: Option<String>,
    /// Filter by status (`new`, `contacted`, `converted`)
    pub status: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Status change payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: LeadStatus,
}

/// Bulk status change payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BulkStatusRequest {
    #[validate(length(min = 1, message = "At least one lead is required"))]
    pub lead_ids: Vec<Uuid>,
    pub status: LeadStatus,
}

/// Admin notes payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNotesRequest {
    pub notes: String,
}

/// Assignment payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignRequest {
    #[validate(length(min = 1, message = "At least one company is required"))]
    pub company_ids: Vec<Uuid>,
}

/// Create admin lead routes
pub fn lead_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads))
        .route("/bulk-status", post(bulk_update_status))
        .route("/:id", get(get_lead_detail).delete(delete_lead))
        .route("/:id/status", patch(update_status))
        .route("/:id/notes", patch(update_notes))
        .route("/:id/matches", get(matching_companies))
        .route("/:id/assign", post(assign_lead))
        .route("/:id/assignments", get(lead_assignments))
}

/// Create the assignment removal route (top-level id, not lead-scoped)
pub fn assignment_routes() -> Router<AppState> {
    Router::new().route("/assignments/:id", delete(remove_assignment))
}

impl LeadListQuery {
    fn into_parts(self) -> AppResult<(LeadFilter, PaginationParams)> {
        let status = match self.status.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                LeadStatus::parse(raw)
                    .ok_or_else(|| AppError::bad_request(format!("Unknown status '{}'", raw)))?,
            ),
        };

        let filter = LeadFilter {
            search: self.search,
            service_id: self.service,
            city: self.city,
            status,
            date_from: self.date_from,
            date_to: self.date_to,
        };

        let defaults = PaginationParams::default();
        let page = PaginationParams {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        };

        Ok((filter, page))
    }
}

/// Filtered, paginated leads list, newest first
#[utoipa::path(
    get,
    path = "/api/admin/leads",
    tag = "Leads",
    params(LeadListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of leads with embedded services"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_leads(
    State(state): State<AppState>,
    Query(query): Query<LeadListQuery>,
) -> AppResult<Json<Paginated<LeadWithService>>> {
    let (filter, page) = query.into_parts()?;
    let leads = state.lead_service.list(filter, page).await?;
    Ok(Json(leads))
}

/// Lead detail with its service
#[utoipa::path(
    get,
    path = "/api/admin/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "Lead id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Lead found", body = LeadWithService),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn get_lead_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<LeadWithService>>> {
    let lead = state.lead_service.get(id).await?;
    Ok(Json(ApiResponse::success(lead)))
}

/// Set a lead's status (any state from any state)
#[utoipa::path(
    patch,
    path = "/api/admin/leads/{id}/status",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "Lead id")),
    request_body = UpdateStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status updated", body = Lead),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<Lead>>> {
    let lead = state.lead_service.update_status(id, payload.status).await?;
    Ok(Json(ApiResponse::success(lead)))
}

/// Apply one status to a batch of leads
#[utoipa::path(
    post,
    path = "/api/admin/leads/bulk-status",
    tag = "Leads",
    request_body = BulkStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All listed leads updated", body = [Lead]),
        (status = 400, description = "Empty batch")
    )
)]
pub async fn bulk_update_status(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BulkStatusRequest>,
) -> AppResult<Json<ApiResponse<Vec<Lead>>>> {
    let leads = state
        .lead_service
        .bulk_update_status(payload.lead_ids, payload.status)
        .await?;
    Ok(Json(ApiResponse::success(leads)))
}

/// Update the admin notes on a lead
#[utoipa::path(
    patch,
    path = "/api/admin/leads/{id}/notes",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "Lead id")),
    request_body = UpdateNotesRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Notes updated", body = Lead),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateNotesRequest>,
) -> AppResult<Json<ApiResponse<Lead>>> {
    let lead = state.lead_service.update_notes(id, payload.notes).await?;
    Ok(Json(ApiResponse::success(lead)))
}

/// Delete a lead outright
#[utoipa::path(
    delete,
    path = "/api/admin/leads/{id}",
    tag = "Leads",
    params(("id" = Uuid, Path, description = "Lead id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Lead deleted"),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn delete_lead(State(state): State<AppState>, Path(id): Path<Uuid>) -> AppResult<NoContent> {
    state.lead_service.delete(id).await?;
    Ok(NoContent)
}

/// Active companies eligible for this lead, ordered by name
#[utoipa::path(
    get,
    path = "/api/admin/leads/{id}/matches",
    tag = "Assignments",
    params(("id" = Uuid, Path, description = "Lead id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matching companies (possibly empty)", body = [Company]),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn matching_companies(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Company>>>> {
    let companies = state.assignment_service.matching_companies(id).await?;
    Ok(Json(ApiResponse::success(companies)))
}

/// Assign the lead to a set of companies, with per-company outcomes
#[utoipa::path(
    post,
    path = "/api/admin/leads/{id}/assign",
    tag = "Assignments",
    params(("id" = Uuid, Path, description = "Lead id")),
    request_body = AssignRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Batch outcome with created and failed entries", body = BatchAssignment),
        (status = 400, description = "Empty company set"),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn assign_lead(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<AssignRequest>,
) -> AppResult<Created<BatchAssignment>> {
    let outcome = state
        .assignment_service
        .assign(id, payload.company_ids, current_user.email)
        .await?;
    Ok(Created(outcome))
}

/// Assignment history for a lead, newest first
#[utoipa::path(
    get,
    path = "/api/admin/leads/{id}/assignments",
    tag = "Assignments",
    params(("id" = Uuid, Path, description = "Lead id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Assignments with company contacts", body = [AssignmentWithCompany])
    )
)]
pub async fn lead_assignments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<AssignmentWithCompany>>>> {
    let assignments = state.assignment_service.assignments_for_lead(id).await?;
    Ok(Json(ApiResponse::success(assignments)))
}

/// Remove a mistaken assignment
#[utoipa::path(
    delete,
    path = "/api/admin/assignments/{id}",
    tag = "Assignments",
    params(("id" = Uuid, Path, description = "Assignment id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Assignment removed"),
        (status = 404, description = "Unknown assignment id")
    )
)]
pub async fn remove_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.assignment_service.remove(id).await?;
    Ok(NoContent)
}
