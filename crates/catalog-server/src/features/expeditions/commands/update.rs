use catalog_common::reference::ReferenceData;
use serde::{Deserialize, Serialize};

use crate::features::shared::validation::{validate_expedition, ExpeditionInput, ValidationErrors};
use crate::models::Expedition;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateExpeditionCommand {
    #[serde(skip)]
    pub expedition_id: i64,

    #[serde(flatten)]
    pub input: ExpeditionInput,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateExpeditionError {
    #[error("Expedition {0} not found")]
    NotFound(i64),

    #[error("Expedition validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store, reference, command), fields(expedition_id = command.expedition_id))]
pub async fn handle(
    store: &dyn CatalogStore,
    reference: &ReferenceData,
    command: UpdateExpeditionCommand,
) -> Result<Expedition, UpdateExpeditionError> {
    let fields = validate_expedition(reference, &command.input)?;

    let expedition = store
        .update_expedition(command.expedition_id, &fields)
        .await?
        .ok_or(UpdateExpeditionError::NotFound(command.expedition_id))?;

    tracing::info!("Expedition updated successfully");

    Ok(expedition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpeditionFields;
    use crate::store::MemoryCatalogStore;

    fn input(continent: &str) -> ExpeditionInput {
        ExpeditionInput {
            expedition: "Andes Expedition".to_string(),
            continent: continent.to_string(),
            country: "PE".to_string(),
            state_province: Some("Cusco".to_string()),
            term: None,
        }
    }

    #[tokio::test]
    async fn test_handle_updates_in_place() {
        let store = MemoryCatalogStore::new();
        let reference = ReferenceData::builtin();
        let created = store
            .create_expedition(&ExpeditionFields {
                expedition: String::new(),
                continent: "Europe".to_string(),
                country: "Spain".to_string(),
                state_province: None,
                term: None,
            })
            .await
            .unwrap();

        let command = UpdateExpeditionCommand {
            expedition_id: created.expedition_id,
            input: input("south america"),
        };
        let updated = handle(&store, &reference, command).await.unwrap();

        assert_eq!(updated.expedition_id, created.expedition_id);
        assert_eq!(updated.continent, "South America");
        assert_eq!(updated.country, "Peru");
        assert_eq!(updated.state_province.as_deref(), Some("Cusco"));
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = MemoryCatalogStore::new();
        let reference = ReferenceData::builtin();
        let command = UpdateExpeditionCommand {
            expedition_id: 12,
            input: input("Africa"),
        };
        assert!(matches!(
            handle(&store, &reference, command).await,
            Err(UpdateExpeditionError::NotFound(12))
        ));
    }
}
