use serde::{Deserialize, Serialize};

use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSpecimenCommand {
    pub specimen_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteSpecimenResponse {
    pub specimen_id: i64,
    pub deleted: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteSpecimenError {
    #[error("Specimen {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    command: DeleteSpecimenCommand,
) -> Result<DeleteSpecimenResponse, DeleteSpecimenError> {
    if !store.delete_specimen(command.specimen_id).await? {
        return Err(DeleteSpecimenError::NotFound(command.specimen_id));
    }

    tracing::info!(specimen_id = command.specimen_id, "Specimen deleted");

    Ok(DeleteSpecimenResponse {
        specimen_id: command.specimen_id,
        deleted: true,
    })
}
