//! HTTP server assembly
//!
//! Builds the store and reference data from [`Config`], mounts the JSON API
//! under `/api/v1` next to the page routes, and serves until a shutdown
//! signal arrives.

pub mod response;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use catalog_common::reference::ReferenceData;
use serde_json::json;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::config::{Config, StorageBackend};
use crate::db;
use crate::error::AppError;
use crate::features::{self, FeatureState};
use crate::middleware;
use crate::store::{CatalogStore, MemoryCatalogStore, PgCatalogStore};

/// Build the shared feature state for the configured backend
pub async fn build_state(config: &Config) -> anyhow::Result<FeatureState> {
    let reference = match &config.catalog.countries_file {
        Some(path) => ReferenceData::from_json_file(path)
            .with_context(|| format!("Failed to load countries from {}", path.display()))?,
        None => ReferenceData::builtin(),
    };

    let store: Arc<dyn CatalogStore> = match config.catalog.storage {
        StorageBackend::Postgres => {
            let pool = db::create_pool(&db::DbConfig::from(&config.database)).await?;
            db::run_migrations(&pool).await?;
            info!("Using PostgreSQL catalog store");
            Arc::new(PgCatalogStore::new(pool))
        },
        StorageBackend::Memory => {
            info!("Using in-memory catalog store, data is lost on shutdown");
            Arc::new(MemoryCatalogStore::new())
        },
    };

    Ok(FeatureState::new(store, Arc::new(reference))
        .with_unique_catalog_numbers(config.catalog.unique_catalog_numbers))
}

/// Create the application router with all routes and middleware
pub fn create_router(state: FeatureState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state.clone())
        .nest("/api/v1", features::router(state.clone()))
        .merge(features::pages_router(state))
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Build the state, bind, and serve with graceful shutdown
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = build_state(&config).await?;
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Health check handler
async fn health_check(State(state): State<FeatureState>) -> Result<Response, AppError> {
    match state.store.health_check().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "store": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Store health check failed: {:?}", e);
            Err(AppError::Unavailable("Catalog store is unreachable".to_string()))
        },
    }
}

async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
