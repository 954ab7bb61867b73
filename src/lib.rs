//! Lynck Services API - Lead-generation backend
//!
//! This crate implements the backend of the Lynck Services home-services
//! referral platform: public catalog reads and lead intake for the
//! marketing site, and an authenticated admin API for lead review,
//! matching, priced assignment to partner companies, and catalog
//! management.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, cache, job queue)
//! - **jobs**: Background jobs (webhook delivery)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Start the webhook delivery worker
//! cargo run -- jobs work
//!
//! # Create an admin account
//! cargo run -- admin create --email staff@example.de --name "Staff"
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod jobs;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Company, Lead, LeadStatus, Password, Service, Timeline};
pub use errors::{AppError, AppResult};
pub use infra::Cache;
