//! Create taxonomy command

use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{validate_taxonomy, TaxonomyInput, ValidationErrors};
use crate::models::Taxonomy;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateTaxonomyCommand {
    pub input: TaxonomyInput,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTaxonomyError {
    #[error("Taxonomy validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store, command), fields(genus = %command.input.genus, species = %command.input.species))]
pub async fn handle(
    store: &dyn CatalogStore,
    command: CreateTaxonomyCommand,
) -> Result<Taxonomy, CreateTaxonomyError> {
    let fields = validate_taxonomy(&command.input)?;

    let taxonomy = store.create_taxonomy(&fields).await?;

    tracing::info!(
        taxonomy_id = taxonomy.taxonomy_id,
        "Taxonomy created successfully"
    );

    Ok(taxonomy)
}
