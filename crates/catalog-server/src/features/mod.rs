//! Feature modules of the catalog server
//!
//! Each record type is a vertical slice with its own commands, queries, and
//! routes:
//!
//! - **specimens**: Catalog entries and the filtered listing
//! - **expeditions**: Collecting trips referenced by specimens
//! - **taxonomies**: Classifications referenced by specimens
//! - **pages**: Form flows that redirect with notices
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//!
//! Handlers are plain async functions taking a `&dyn CatalogStore`, so the
//! same command serves the JSON API, the pages, and the tests.

pub mod expeditions;
pub mod pages;
pub mod shared;
pub mod specimens;
pub mod taxonomies;

use std::sync::Arc;

use axum::Router;
use catalog_common::reference::ReferenceData;

use crate::store::CatalogStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Persistence backend
    pub store: Arc<dyn CatalogStore>,
    /// Continents and countries used by the expedition validators
    pub reference: Arc<ReferenceData>,
    /// Reject catalog numbers already used by another specimen
    pub unique_catalog_numbers: bool,
}

impl FeatureState {
    pub fn new(store: Arc<dyn CatalogStore>, reference: Arc<ReferenceData>) -> Self {
        Self {
            store,
            reference,
            unique_catalog_numbers: false,
        }
    }

    pub fn with_unique_catalog_numbers(mut self, unique: bool) -> Self {
        self.unique_catalog_numbers = unique;
        self
    }
}

/// Creates the JSON API router, mounted under `/api/v1`
///
/// - `/specimens` - Specimen CRUD and filtered listing
/// - `/expeditions` - Expedition CRUD
/// - `/taxonomies` - Taxonomy CRUD
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/specimens", specimens::specimens_routes().with_state(state.clone()))
        .nest("/expeditions", expeditions::expeditions_routes().with_state(state.clone()))
        .nest("/taxonomies", taxonomies::taxonomies_routes().with_state(state))
}

/// Creates the page router, mounted at the root
pub fn pages_router(state: FeatureState) -> Router<()> {
    pages::pages_routes().with_state(state)
}
