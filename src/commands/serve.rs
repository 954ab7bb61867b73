//! Serve command - Starts the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use apalis_sql::postgres::PostgresStorage;
use apalis_sql::sqlx::postgres::PgPoolOptions;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Cache, Database, WebhookOutbox, WebhookQueue};
use crate::jobs::WebhookJob;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database
    let db = Arc::new(Database::connect(&config).await);
    tracing::info!("Database connected");

    // Initialize Redis cache
    let cache = Arc::new(Cache::connect(&config).await);
    tracing::info!("Redis cache connected");

    // Initialize the webhook outbox (apalis queue over its own pool)
    let webhook = Arc::new(webhook_outbox(&config).await?) as Arc<dyn WebhookQueue>;
    tracing::info!("Webhook outbox ready");

    // Create application state with centralized service container
    let app_state = AppState::from_config(db, cache, config, webhook);

    // Build router
    let app = create_router(app_state);

    // Start server; connect info feeds the per-IP rate limiter
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Connect the apalis storage the lead service enqueues webhook jobs into.
async fn webhook_outbox(config: &Config) -> AppResult<WebhookOutbox> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Failed to connect to database: {}", e)))?;

    PostgresStorage::setup(&pool)
        .await
        .map_err(|e| AppError::internal(format!("Failed to setup job storage: {}", e)))?;

    let storage: PostgresStorage<WebhookJob> = PostgresStorage::new(pool);
    Ok(WebhookOutbox::new(storage))
}
