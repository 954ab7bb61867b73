//! Public site handlers: catalog reads, lead submission and the thank-you
//! page read-back.
//!
//! Everything here is unauthenticated and CORS-open; the marketing site is
//! served from a different origin.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{City, LeadWithService, Service, SubmitLead};
use crate::errors::{AppError, AppResult};

/// Response for a successful lead submission
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitLeadResponse {
    pub success: bool,
    pub lead_id: Uuid,
}

/// Create the public site routes
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_services))
        .route("/services/:slug", get(get_service))
        .route("/cities", get(list_cities))
        .route("/leads", post(submit_lead))
        .route("/leads/:id", get(get_lead))
}

/// Active service categories for the public site
#[utoipa::path(
    get,
    path = "/api/services",
    tag = "Public",
    responses(
        (status = 200, description = "Active services ordered by name", body = [Service])
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    // Read-through cache; a cold or broken cache falls back to the database
    if let Ok(Some(cached)) = state.cache.get_services().await {
        return Ok(Json(cached));
    }

    let services = state.catalog_service.active_services().await?;

    if let Err(e) = state.cache.set_services(&services).await {
        tracing::debug!(error = %e, "Failed to cache service list");
    }

    Ok(Json(services))
}

/// Resolve a service page by slug
#[utoipa::path(
    get,
    path = "/api/services/{slug}",
    tag = "Public",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service found", body = Service),
        (status = 404, description = "Unknown or deactivated slug")
    )
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Service>> {
    let service = state.catalog_service.service_by_slug(&slug).await?;
    Ok(Json(service))
}

/// Active cities for the public site
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = "Public",
    responses(
        (status = 200, description = "Active cities ordered by name", body = [City])
    )
)]
pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<Vec<City>>> {
    if let Ok(Some(cached)) = state.cache.get_cities().await {
        return Ok(Json(cached));
    }

    let cities = state.catalog_service.active_cities().await?;

    if let Err(e) = state.cache.set_cities(&cities).await {
        tracing::debug!(error = %e, "Failed to cache city list");
    }

    Ok(Json(cities))
}

/// Submit a service request from the public form.
///
/// The response shapes are part of the public contract: the form renders
/// the `details` list on 400 and redirects to the thank-you page with
/// `lead_id` on 201.
#[utoipa::path(
    post,
    path = "/api/leads",
    tag = "Public",
    request_body = SubmitLead,
    responses(
        (status = 201, description = "Lead created", body = SubmitLeadResponse),
        (status = 400, description = "Validation failed with per-field details"),
        (status = 500, description = "Lead could not be persisted")
    )
)]
pub async fn submit_lead(State(state): State<AppState>, Json(payload): Json<SubmitLead>) -> Response {
    match state.lead_service.submit(payload).await {
        Ok(lead) => (
            StatusCode::CREATED,
            Json(SubmitLeadResponse {
                success: true,
                lead_id: lead.id,
            }),
        )
            .into_response(),
        Err(rejection @ AppError::RejectedLead(_)) => rejection.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Lead creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to create lead",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Lead read-back for the thank-you page (`/danke?lead_id=...`)
#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    tag = "Public",
    params(("id" = Uuid, Path, description = "Lead id")),
    responses(
        (status = 200, description = "Lead with its service", body = LeadWithService),
        (status = 404, description = "Unknown lead id")
    )
)]
pub async fn get_lead(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LeadWithService>> {
    let lead = state.lead_service.get(id).await?;
    Ok(Json(lead))
}
