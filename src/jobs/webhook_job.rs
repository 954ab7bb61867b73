//! Webhook delivery background job.
//!
//! New leads are announced to an external automation endpoint (Zapier/n8n
//! style) configured via `WEBHOOK_URL`. Delivery is a non-critical side
//! channel: it never affects the originating request, and when no URL is
//! configured the job is logged and dropped.

use serde::{Deserialize, Serialize};
use std::env;

use crate::domain::Lead;
use crate::errors::AppError;

/// Webhook job payload: the lead's public fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookJob {
    pub lead_id: uuid::Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub city: String,
    pub plz: String,
    pub service_id: Option<uuid::Uuid>,
    pub details: String,
    pub timeline: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl From<&Lead> for WebhookJob {
    fn from(lead: &Lead) -> Self {
        Self {
            lead_id: lead.id,
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            city: lead.city.clone(),
            plz: lead.plz.clone(),
            service_id: lead.service_id,
            details: lead.service_details.clone(),
            timeline: lead.timeline.as_str().to_string(),
            timestamp: lead.created_at,
        }
    }
}

/// Webhook job handler - POSTs the payload to the configured endpoint.
pub async fn webhook_job_handler(job: WebhookJob) -> Result<(), AppError> {
    let Some(url) = env::var("WEBHOOK_URL").ok().filter(|u| !u.is_empty()) else {
        tracing::info!(lead_id = %job.lead_id, "No webhook URL configured, skipping delivery");
        return Ok(());
    };

    tracing::info!(lead_id = %job.lead_id, "Delivering lead webhook");

    let client = reqwest::Client::new();
    let response = client.post(&url).json(&job).send().await.map_err(|e| {
        tracing::warn!(lead_id = %job.lead_id, error = %e, "Webhook delivery failed");
        AppError::Queue(format!("Webhook delivery failed: {}", e))
    })?;

    if !response.status().is_success() {
        // The receiver answered; attempting again is unlikely to change the
        // outcome, so the job is considered done.
        tracing::warn!(
            lead_id = %job.lead_id,
            status = %response.status(),
            "Webhook endpoint returned a non-success status"
        );
        return Ok(());
    }

    tracing::info!(lead_id = %job.lead_id, "Webhook delivered");
    Ok(())
}
