//! HTTP request handlers.

pub mod auth_handler;
pub mod catalog_admin_handler;
pub mod company_handler;
pub mod dashboard_handler;
pub mod lead_handler;
pub mod site_handler;

pub use auth_handler::auth_routes;
pub use catalog_admin_handler::catalog_admin_routes;
pub use company_handler::company_routes;
pub use dashboard_handler::dashboard_routes;
pub use lead_handler::{assignment_routes, lead_routes};
pub use site_handler::site_routes;
