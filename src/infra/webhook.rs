//! Webhook outbox: hands new-lead notifications to the background queue.
//!
//! Enqueueing is best-effort from the caller's perspective; the lead
//! service logs and swallows queue failures so a broken queue never breaks
//! lead intake.

use apalis::prelude::Storage;
use apalis_sql::postgres::PostgresStorage;
use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::jobs::WebhookJob;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Queue of pending webhook deliveries.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WebhookQueue: Send + Sync {
    async fn enqueue(&self, job: WebhookJob) -> AppResult<()>;
}

/// Postgres-backed outbox using the apalis job queue.
#[derive(Clone)]
pub struct WebhookOutbox {
    storage: PostgresStorage<WebhookJob>,
}

impl WebhookOutbox {
    pub fn new(storage: PostgresStorage<WebhookJob>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl WebhookQueue for WebhookOutbox {
    async fn enqueue(&self, job: WebhookJob) -> AppResult<()> {
        let mut storage = self.storage.clone();
        storage
            .push(job)
            .await
            .map(|_| ())
            .map_err(|e| AppError::Queue(format!("Failed to enqueue webhook job: {}", e)))
    }
}
