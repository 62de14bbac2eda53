use serde::{Deserialize, Serialize};

use crate::models::SpecimenDetail;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSpecimenQuery {
    pub specimen_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetSpecimenError {
    #[error("Specimen {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    query: GetSpecimenQuery,
) -> Result<SpecimenDetail, GetSpecimenError> {
    store
        .get_specimen(query.specimen_id)
        .await?
        .ok_or(GetSpecimenError::NotFound(query.specimen_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryCatalogStore;

    #[tokio::test]
    async fn test_handle_not_found() {
        let store = MemoryCatalogStore::new();
        let result = handle(&store, GetSpecimenQuery { specimen_id: 1 }).await;
        assert!(matches!(result, Err(GetSpecimenError::NotFound(1))));
    }
}
