//! Create specimen command
//!
//! A specimen needs a valid catalog number and an existing expedition. The
//! taxonomy is optional but must exist when given.

use serde::{Deserialize, Serialize};

use super::{catalog_number_taken, missing_reference};
use crate::features::shared::validation::{
    validate_catalog_number, FieldError, IdInput, ValidationErrors,
};
use crate::models::{SpecimenDetail, SpecimenFields};
use crate::store::{CatalogStore, StoreError};

/// Command to create a new specimen
///
/// Accepted both as a JSON body and as a form post, so the reference ids
/// tolerate numeric strings and blank values. Non-numeric ids fail
/// validation on their own field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSpecimenCommand {
    #[serde(default)]
    pub catalog_number: String,

    #[serde(default)]
    pub expedition_id: IdInput,

    #[serde(default)]
    pub taxonomy_id: IdInput,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateSpecimenError {
    #[error("Specimen validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for CreateSpecimenError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingReference { entity, id } => {
                Self::Validation(missing_reference(entity, id))
            },
            other => Self::Store(other),
        }
    }
}

impl CreateSpecimenCommand {
    /// Validates the command, returning the normalized fields to store
    pub fn validate(&self) -> Result<SpecimenFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let catalog_number =
            errors.check("catalog_number", validate_catalog_number(&self.catalog_number));

        let expedition_id = errors
            .check("expedition_id", self.expedition_id.resolve("expedition"))
            .flatten();
        if self.expedition_id == IdInput::Blank {
            errors.add("expedition_id", FieldError::Required { label: "Expedition" });
        }

        let taxonomy_id = errors
            .check("taxonomy_id", self.taxonomy_id.resolve("taxonomy"))
            .flatten();

        match catalog_number {
            Some(catalog_number) if errors.is_empty() => Ok(SpecimenFields {
                catalog_number,
                expedition_id,
                taxonomy_id,
            }),
            _ => Err(errors),
        }
    }
}

#[tracing::instrument(
    skip(store, command),
    fields(
        catalog_number = %command.catalog_number,
        expedition_id = ?command.expedition_id,
        taxonomy_id = ?command.taxonomy_id
    )
)]
pub async fn handle(
    store: &dyn CatalogStore,
    command: CreateSpecimenCommand,
    unique_catalog_numbers: bool,
) -> Result<SpecimenDetail, CreateSpecimenError> {
    let fields = command.validate()?;

    if unique_catalog_numbers
        && store
            .catalog_number_in_use(&fields.catalog_number, None)
            .await?
    {
        return Err(catalog_number_taken(&fields.catalog_number).into());
    }

    let specimen = store.create_specimen(&fields).await?;

    tracing::info!(
        specimen_id = specimen.specimen_id,
        "Specimen created successfully"
    );

    Ok(specimen)
}
