//! Specimen Catalog Server - Main entry point

use anyhow::Result;
use catalog_common::logging::{init_logging, LogConfig};
use tracing::info;

use catalog_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Environment variables take precedence over these defaults
    let log_config = LogConfig::builder()
        .log_file_prefix("catalog-server")
        .filter_directives("catalog_server=debug,tower_http=debug,sqlx=info")
        .build()
        .merge_env()?;

    let _guard = init_logging(&log_config)?;

    info!("Starting Specimen Catalog Server");

    let config = Config::load()?;
    info!(
        storage = ?config.catalog.storage,
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
