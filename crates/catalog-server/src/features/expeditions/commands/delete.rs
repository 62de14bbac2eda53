use serde::{Deserialize, Serialize};

use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteExpeditionCommand {
    pub expedition_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteExpeditionResponse {
    pub expedition_id: i64,
    /// Specimens removed along with the expedition
    pub deleted_specimens: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteExpeditionError {
    #[error("Expedition {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    command: DeleteExpeditionCommand,
) -> Result<DeleteExpeditionResponse, DeleteExpeditionError> {
    let deleted_specimens = store
        .delete_expedition(command.expedition_id)
        .await?
        .ok_or(DeleteExpeditionError::NotFound(command.expedition_id))?;

    tracing::info!(deleted_specimens, "Expedition deleted");

    Ok(DeleteExpeditionResponse {
        expedition_id: command.expedition_id,
        deleted_specimens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpeditionFields, SpecimenFields};
    use crate::store::MemoryCatalogStore;

    #[tokio::test]
    async fn test_handle_cascades_to_specimens() {
        let store = MemoryCatalogStore::new();
        let fields = ExpeditionFields {
            expedition: String::new(),
            continent: "Asia".to_string(),
            country: "Japan".to_string(),
            state_province: None,
            term: None,
        };
        let doomed = store.create_expedition(&fields).await.unwrap();
        let kept = store.create_expedition(&fields).await.unwrap();

        for expedition_id in [doomed.expedition_id, doomed.expedition_id, kept.expedition_id] {
            store
                .create_specimen(&SpecimenFields {
                    catalog_number: "1.1.1.1".to_string(),
                    expedition_id: Some(expedition_id),
                    taxonomy_id: None,
                })
                .await
                .unwrap();
        }

        let response = handle(
            &store,
            DeleteExpeditionCommand {
                expedition_id: doomed.expedition_id,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.deleted_specimens, 2);
        assert!(store.get_expedition(doomed.expedition_id).await.unwrap().is_none());
        assert!(store.get_specimen(3).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = MemoryCatalogStore::new();
        let result = handle(&store, DeleteExpeditionCommand { expedition_id: 1 }).await;
        assert!(matches!(result, Err(DeleteExpeditionError::NotFound(1))));
    }
}
