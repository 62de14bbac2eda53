//! Create expedition command

use catalog_common::reference::ReferenceData;
use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{validate_expedition, ExpeditionInput, ValidationErrors};
use crate::models::{Expedition, ExpeditionFields};
use crate::store::{CatalogStore, StoreError};

/// Command to create a new expedition
///
/// # Examples
///
/// ```rust,ignore
/// let command = CreateExpeditionCommand {
///     input: ExpeditionInput {
///         expedition: "Lake Turkana Expedition".to_string(),
///         continent: "africa".to_string(),
///         country: "KE".to_string(),
///         ..Default::default()
///     },
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateExpeditionCommand {
    pub input: ExpeditionInput,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateExpeditionError {
    #[error("Expedition validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl CreateExpeditionCommand {
    /// Validates every field, returning the normalized values
    pub fn validate(&self, reference: &ReferenceData) -> Result<ExpeditionFields, ValidationErrors> {
        validate_expedition(reference, &self.input)
    }
}

#[tracing::instrument(skip(store, reference, command), fields(expedition = %command.input.expedition))]
pub async fn handle(
    store: &dyn CatalogStore,
    reference: &ReferenceData,
    command: CreateExpeditionCommand,
) -> Result<Expedition, CreateExpeditionError> {
    let fields = command.validate(reference)?;

    let expedition = store.create_expedition(&fields).await?;

    tracing::info!(
        expedition_id = expedition.expedition_id,
        continent = %expedition.continent,
        country = %expedition.country,
        "Expedition created successfully"
    );

    Ok(expedition)
}
