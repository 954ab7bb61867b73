//! Admin company directory handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Company, CompanyChanges, CompanyFilter, CreateCompany};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, NoContent};

/// Query parameters of the admin companies table
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyListQuery {
    /// Case-insensitive substring match over name/email/phone
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

/// Create admin company routes
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/:id",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// Companies for the admin table, ordered by name
#[utoipa::path(
    get,
    path = "/api/admin/companies",
    tag = "Companies",
    params(CompanyListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Companies ordered by name", body = [Company])
    )
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompanyListQuery>,
) -> AppResult<Json<ApiResponse<Vec<Company>>>> {
    let filter = CompanyFilter {
        search: query.search,
        is_active: query.is_active,
    };
    let companies = state.company_service.list(filter).await?;
    Ok(Json(ApiResponse::success(companies)))
}

/// Company detail
#[utoipa::path(
    get,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "Company id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Company found", body = Company),
        (status = 404, description = "Unknown company id")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let company = state.company_service.get(id).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Register a partner company
#[utoipa::path(
    post,
    path = "/api/admin/companies",
    tag = "Companies",
    request_body = CreateCompany,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Validation error (empty coverage sets included)")
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCompany>,
) -> AppResult<Created<Company>> {
    let company = state.company_service.create(payload).await?;
    Ok(Created(company))
}

/// Edit a partner company
#[utoipa::path(
    put,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "Company id")),
    request_body = CompanyChanges,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Unknown company id")
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompanyChanges>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let company = state.company_service.update(id, payload).await?;
    Ok(Json(ApiResponse::success(company)))
}

/// Remove a partner company (assignment history is kept)
#[utoipa::path(
    delete,
    path = "/api/admin/companies/{id}",
    tag = "Companies",
    params(("id" = Uuid, Path, description = "Company id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Unknown company id")
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.company_service.delete(id).await?;
    Ok(NoContent)
}
