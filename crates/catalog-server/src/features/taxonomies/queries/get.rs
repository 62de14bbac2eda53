use serde::{Deserialize, Serialize};

use crate::models::Taxonomy;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTaxonomyQuery {
    pub taxonomy_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetTaxonomyError {
    #[error("Taxonomy {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    query: GetTaxonomyQuery,
) -> Result<Taxonomy, GetTaxonomyError> {
    store
        .get_taxonomy(query.taxonomy_id)
        .await?
        .ok_or(GetTaxonomyError::NotFound(query.taxonomy_id))
}
