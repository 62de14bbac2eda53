//! Update specimen command

use serde::{Deserialize, Serialize};

use super::{catalog_number_taken, missing_reference};
use crate::features::shared::validation::{
    validate_catalog_number, FieldError, IdInput, ValidationErrors,
};
use crate::models::{SpecimenDetail, SpecimenFields};
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSpecimenCommand {
    /// Taken from the path, never from the body
    #[serde(skip)]
    pub specimen_id: i64,

    #[serde(default)]
    pub catalog_number: String,

    #[serde(default)]
    pub expedition_id: IdInput,

    #[serde(default)]
    pub taxonomy_id: IdInput,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateSpecimenError {
    #[error("Specimen {0} not found")]
    NotFound(i64),

    #[error("Specimen validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for UpdateSpecimenError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingReference { entity, id } => {
                Self::Validation(missing_reference(entity, id))
            },
            other => Self::Store(other),
        }
    }
}

impl UpdateSpecimenCommand {
    /// Keep a specimen's references and replace only its catalog number
    pub fn catalog_number_only(specimen: &SpecimenDetail, catalog_number: String) -> Self {
        let current = SpecimenFields::from(specimen);
        Self {
            specimen_id: specimen.specimen_id,
            catalog_number,
            expedition_id: current.expedition_id.into(),
            taxonomy_id: current.taxonomy_id.into(),
        }
    }

    /// Validates the command against the specimen's current state
    ///
    /// An expedition is required, except on specimens that never had one.
    pub fn validate(&self, current: &SpecimenDetail) -> Result<SpecimenFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let catalog_number =
            errors.check("catalog_number", validate_catalog_number(&self.catalog_number));

        let expedition_id = errors
            .check("expedition_id", self.expedition_id.resolve("expedition"))
            .flatten();
        if self.expedition_id == IdInput::Blank && current.expedition.is_some() {
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
    fields(specimen_id = command.specimen_id, catalog_number = %command.catalog_number)
)]
pub async fn handle(
    store: &dyn CatalogStore,
    command: UpdateSpecimenCommand,
    unique_catalog_numbers: bool,
) -> Result<SpecimenDetail, UpdateSpecimenError> {
    let current = store
        .get_specimen(command.specimen_id)
        .await?
        .ok_or(UpdateSpecimenError::NotFound(command.specimen_id))?;

    let fields = command.validate(&current)?;

    if unique_catalog_numbers
        && store
            .catalog_number_in_use(&fields.catalog_number, Some(command.specimen_id))
            .await?
    {
        return Err(catalog_number_taken(&fields.catalog_number).into());
    }

    let updated = store
        .update_specimen(command.specimen_id, &fields)
        .await?
        .ok_or(UpdateSpecimenError::NotFound(command.specimen_id))?;

    tracing::info!("Specimen updated successfully");

    Ok(updated)
}
