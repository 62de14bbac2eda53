//! Specimen Catalog Server Library
//!
//! HTTP server for a natural-history specimen catalog.
//!
//! # Overview
//!
//! The server manages three record types:
//!
//! - **Expeditions**: collecting trips with a validated continent and country
//! - **Taxonomies**: eight-rank classifications
//! - **Specimens**: catalog entries that reference one of each
//!
//! It exposes them twice: a JSON API under `/api/v1`, and page-level form
//! flows at the root that answer with redirects carrying notices.
//!
//! # Architecture
//!
//! Each record type is a feature slice of **commands** (create, update,
//! delete) and **queries** (get, list) over the [`store::CatalogStore`]
//! trait. Two stores implement it: PostgreSQL via SQLx and an in-memory
//! store used for development and tests.
//!
//! ## Framework Stack
//!
//! - **Axum**: HTTP routing and extractors
//! - **SQLx**: PostgreSQL access and migrations
//! - **Tower**: Middleware (CORS, tracing, compression)
//!
//! # Example
//!
//! ```no_run
//! use catalog_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use error::AppError;
