use serde::{Deserialize, Serialize};

use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaxonomyCommand {
    pub taxonomy_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaxonomyResponse {
    pub taxonomy_id: i64,
    pub deleted_specimens: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteTaxonomyError {
    #[error("Taxonomy {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    command: DeleteTaxonomyCommand,
) -> Result<DeleteTaxonomyResponse, DeleteTaxonomyError> {
    let deleted_specimens = store
        .delete_taxonomy(command.taxonomy_id)
        .await?
        .ok_or(DeleteTaxonomyError::NotFound(command.taxonomy_id))?;

    tracing::info!(deleted_specimens, "Taxonomy deleted");

    Ok(DeleteTaxonomyResponse {
        taxonomy_id: command.taxonomy_id,
        deleted_specimens,
    })
}
