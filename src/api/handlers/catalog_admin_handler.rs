//! Admin catalog handlers: service management and the full city list.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Router,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::domain::{City, Service, ServiceChanges};
use crate::errors::AppResult;
use crate::types::ApiResponse;

/// Create admin catalog routes
pub fn catalog_admin_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(list_all_services))
        .route("/services/:id", put(update_service))
        .route("/cities", get(list_all_cities))
}

/// All services including deactivated ones
#[utoipa::path(
    get,
    path = "/api/admin/services",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All services ordered by name", body = [Service])
    )
)]
pub async fn list_all_services(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Service>>>> {
    let services = state.catalog_service.all_services().await?;
    Ok(Json(ApiResponse::success(services)))
}

/// Edit a service (fields, price, active flag)
#[utoipa::path(
    put,
    path = "/api/admin/services/{id}",
    tag = "Catalog",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = ServiceChanges,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown service id")
    )
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServiceChanges>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let service = state.catalog_service.update_service(id, payload).await?;

    // The public surface caches the catalog; stale entries must go now
    if let Err(e) = state.cache.invalidate_catalog().await {
        tracing::warn!(error = %e, "Failed to invalidate catalog cache");
    }

    Ok(Json(ApiResponse::success(service)))
}

/// All cities including deactivated ones (company form source)
#[utoipa::path(
    get,
    path = "/api/admin/cities",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All cities ordered by name", body = [City])
    )
)]
pub async fn list_all_cities(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<City>>>> {
    let cities = state.catalog_service.all_cities().await?;
    Ok(Json(ApiResponse::success(cities)))
}
