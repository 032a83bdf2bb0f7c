//! Lookup Registry API - Main Entry Point

use std::sync::Arc;

use axum::extract::Request;
use axum::ServiceExt;
use tokio::net::TcpListener;

use lookup_registry::domain::models::EntityKind;
use lookup_registry::infrastructure::driven_adapters::config::AppConfig;
use lookup_registry::infrastructure::driven_adapters::database;
use lookup_registry::infrastructure::driven_adapters::lookup_repository::PostgresLookupRepository;
use lookup_registry::infrastructure::driving_adapters::api_rest::{build_app, AppState};
use lookup_registry::shared::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    // Held until exit so the file writers flush
    let _telemetry = telemetry::init(&config.logging)?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let role_repository = Arc::new(PostgresLookupRepository::new(pool.clone(), EntityKind::Role));
    let user_status_repository = Arc::new(PostgresLookupRepository::new(pool, EntityKind::UserStatus));

    // Wire validators and use cases, then build the router
    let app = build_app(AppState::new(role_repository, user_status_repository));

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
