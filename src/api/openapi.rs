//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, catalog_admin_handler, company_handler, dashboard_handler, lead_handler,
    site_handler,
};
use crate::domain::{
    Assignment, AssignmentFailure, AssignmentWithCompany, BatchAssignment, City, Company,
    CompanyChanges, CompanyContact, CreateCompany, Lead, LeadStatus, LeadWithService, Service,
    ServiceChanges, SubmitLead, Timeline,
};
use crate::services::{DashboardStats, TokenResponse};

/// OpenAPI documentation for the Lynck Services API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lynck Services API",
        version = "0.1.0",
        description = "Lead-generation backend for the Lynck Services home-services referral platform",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Lynck Services", email = "dev@lynck-services.de")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
        (url = "https://api.lynck-services.de", description = "Production server")
    ),
    paths(
        // Public endpoints
        site_handler::list_services,
        site_handler::get_service,
        site_handler::list_cities,
        site_handler::submit_lead,
        site_handler::get_lead,
        // Authentication
        auth_handler::login,
        // Dashboard
        dashboard_handler::dashboard,
        // Leads
        lead_handler::list_leads,
        lead_handler::get_lead_detail,
        lead_handler::update_status,
        lead_handler::bulk_update_status,
        lead_handler::update_notes,
        lead_handler::delete_lead,
        lead_handler::matching_companies,
        lead_handler::assign_lead,
        lead_handler::lead_assignments,
        lead_handler::remove_assignment,
        // Companies
        company_handler::list_companies,
        company_handler::get_company,
        company_handler::create_company,
        company_handler::update_company,
        company_handler::delete_company,
        // Catalog
        catalog_admin_handler::list_all_services,
        catalog_admin_handler::update_service,
        catalog_admin_handler::list_all_cities,
    ),
    components(
        schemas(
            // Domain types
            Service,
            ServiceChanges,
            City,
            Company,
            CompanyContact,
            CreateCompany,
            CompanyChanges,
            Lead,
            LeadWithService,
            LeadStatus,
            Timeline,
            SubmitLead,
            Assignment,
            AssignmentWithCompany,
            AssignmentFailure,
            BatchAssignment,
            DashboardStats,
            // Handler types
            site_handler::SubmitLeadResponse,
            auth_handler::LoginRequest,
            TokenResponse,
            dashboard_handler::DashboardResponse,
            lead_handler::UpdateStatusRequest,
            lead_handler::BulkStatusRequest,
            lead_handler::UpdateNotesRequest,
            lead_handler::AssignRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Public", description = "Catalog reads and lead submission"),
        (name = "Authentication", description = "Admin login"),
        (name = "Dashboard", description = "Admin dashboard statistics"),
        (name = "Leads", description = "Lead review and management"),
        (name = "Assignments", description = "Lead matching and assignment"),
        (name = "Companies", description = "Partner company management"),
        (name = "Catalog", description = "Service and city management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/admin/login"))
                        .build(),
                ),
            );
        }
    }
}
