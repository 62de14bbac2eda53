//! Catalog persistence
//!
//! [`CatalogStore`] is the seam between the command/query handlers and the
//! backing store. [`PgCatalogStore`] talks to PostgreSQL through a shared
//! pool; [`MemoryCatalogStore`] keeps everything in process and backs the
//! router tests and `CATALOG_STORAGE=memory` runs.
//!
//! Multi-record writes (cascading deletes, create-and-link) are single store
//! operations so the PostgreSQL implementation can run them in one
//! transaction.

mod filter;
mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    Expedition, ExpeditionFields, SpecimenDetail, SpecimenFields, Taxonomy, TaxonomyFields,
};

pub use filter::{FilterField, SpecimenFilter};
pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A referenced expedition or taxonomy does not exist
    #[error("{entity} {id} does not exist")]
    MissingReference { entity: &'static str, id: i64 },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A page of records plus the unpaged total
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Persistence operations for the three catalog records
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Verify the store is reachable
    async fn health_check(&self) -> StoreResult<()>;

    async fn create_expedition(&self, fields: &ExpeditionFields) -> StoreResult<Expedition>;

    async fn get_expedition(&self, id: i64) -> StoreResult<Option<Expedition>>;

    async fn update_expedition(
        &self,
        id: i64,
        fields: &ExpeditionFields,
    ) -> StoreResult<Option<Expedition>>;

    /// Delete an expedition and every specimen referencing it
    ///
    /// Returns the number of specimens removed, or `None` when the expedition
    /// does not exist.
    async fn delete_expedition(&self, id: i64) -> StoreResult<Option<u64>>;

    /// Expeditions in ascending id order
    async fn list_expeditions(&self, limit: i64, offset: i64) -> StoreResult<Page<Expedition>>;

    async fn create_taxonomy(&self, fields: &TaxonomyFields) -> StoreResult<Taxonomy>;

    async fn get_taxonomy(&self, id: i64) -> StoreResult<Option<Taxonomy>>;

    async fn update_taxonomy(
        &self,
        id: i64,
        fields: &TaxonomyFields,
    ) -> StoreResult<Option<Taxonomy>>;

    /// Delete a taxonomy and every specimen referencing it
    async fn delete_taxonomy(&self, id: i64) -> StoreResult<Option<u64>>;

    /// Taxonomies in ascending id order
    async fn list_taxonomies(&self, limit: i64, offset: i64) -> StoreResult<Page<Taxonomy>>;

    /// Create a taxonomy and link it to a specimen that has none
    ///
    /// Returns `None` when the specimen does not exist.
    async fn create_taxonomy_for_specimen(
        &self,
        specimen_id: i64,
        fields: &TaxonomyFields,
    ) -> StoreResult<Option<Taxonomy>>;

    async fn create_specimen(&self, fields: &SpecimenFields) -> StoreResult<SpecimenDetail>;

    async fn get_specimen(&self, id: i64) -> StoreResult<Option<SpecimenDetail>>;

    async fn update_specimen(
        &self,
        id: i64,
        fields: &SpecimenFields,
    ) -> StoreResult<Option<SpecimenDetail>>;

    /// Returns `false` when the specimen does not exist
    async fn delete_specimen(&self, id: i64) -> StoreResult<bool>;

    /// Matching specimens, `specimen_id` descending
    async fn list_specimens(
        &self,
        filter: &SpecimenFilter,
        limit: i64,
        offset: i64,
    ) -> StoreResult<Page<SpecimenDetail>>;

    /// Whether another specimen already uses `catalog_number`
    async fn catalog_number_in_use(
        &self,
        catalog_number: &str,
        excluding: Option<i64>,
    ) -> StoreResult<bool>;

    /// Lowest specimen id referencing the expedition
    async fn first_specimen_for_expedition(&self, expedition_id: i64) -> StoreResult<Option<i64>>;
}
