//! Background jobs.

pub mod webhook_job;

pub use webhook_job::{webhook_job_handler, WebhookJob};
