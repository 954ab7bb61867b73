//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `jobs` - Webhook delivery job management
//! - `admin` - Staff account provisioning

pub mod args;

pub use args::{Cli, Commands};
