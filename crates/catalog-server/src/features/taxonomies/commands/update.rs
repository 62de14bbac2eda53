use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{validate_taxonomy, TaxonomyInput, ValidationErrors};
use crate::models::Taxonomy;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTaxonomyCommand {
    #[serde(skip)]
    pub taxonomy_id: i64,

    #[serde(flatten)]
    pub input: TaxonomyInput,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateTaxonomyError {
    #[error("Taxonomy {0} not found")]
    NotFound(i64),

    #[error("Taxonomy validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store, command), fields(taxonomy_id = command.taxonomy_id))]
pub async fn handle(
    store: &dyn CatalogStore,
    command: UpdateTaxonomyCommand,
) -> Result<Taxonomy, UpdateTaxonomyError> {
    let fields = validate_taxonomy(&command.input)?;

    let taxonomy = store
        .update_taxonomy(command.taxonomy_id, &fields)
        .await?
        .ok_or(UpdateTaxonomyError::NotFound(command.taxonomy_id))?;

    tracing::info!("Taxonomy updated successfully");

    Ok(taxonomy)
}
