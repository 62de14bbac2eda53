//! Edit the taxonomy of a specimen
//!
//! The specimen's taxonomy is updated in place. A specimen without one gets a
//! new taxonomy linked to it in the same store operation.

use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{validate_taxonomy, TaxonomyInput, ValidationErrors};
use crate::models::Taxonomy;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSpecimenTaxonomyCommand {
    #[serde(skip)]
    pub specimen_id: i64,

    #[serde(flatten)]
    pub input: TaxonomyInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSpecimenTaxonomyResponse {
    pub specimen_id: i64,
    pub taxonomy: Taxonomy,
    /// Whether a new taxonomy was created and linked
    pub created: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateSpecimenTaxonomyError {
    #[error("Specimen {0} not found")]
    SpecimenNotFound(i64),

    #[error("Taxonomy validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store, command), fields(specimen_id = command.specimen_id))]
pub async fn handle(
    store: &dyn CatalogStore,
    command: UpdateSpecimenTaxonomyCommand,
) -> Result<UpdateSpecimenTaxonomyResponse, UpdateSpecimenTaxonomyError> {
    let not_found = || UpdateSpecimenTaxonomyError::SpecimenNotFound(command.specimen_id);

    let specimen = store
        .get_specimen(command.specimen_id)
        .await?
        .ok_or_else(not_found)?;

    let fields = validate_taxonomy(&command.input)?;

    let (taxonomy, created) = match specimen.taxonomy {
        Some(current) => {
            let taxonomy = store
                .update_taxonomy(current.taxonomy_id, &fields)
                .await?
                .ok_or_else(not_found)?;
            (taxonomy, false)
        },
        None => {
            let taxonomy = store
                .create_taxonomy_for_specimen(command.specimen_id, &fields)
                .await?
                .ok_or_else(not_found)?;
            (taxonomy, true)
        },
    };

    tracing::info!(
        taxonomy_id = taxonomy.taxonomy_id,
        created,
        "Specimen taxonomy saved"
    );

    Ok(UpdateSpecimenTaxonomyResponse {
        specimen_id: command.specimen_id,
        taxonomy,
        created,
    })
}
