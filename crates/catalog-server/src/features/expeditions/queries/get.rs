use serde::{Deserialize, Serialize};

use crate::models::Expedition;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetExpeditionQuery {
    pub expedition_id: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum GetExpeditionError {
    #[error("Expedition {0} not found")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    query: GetExpeditionQuery,
) -> Result<Expedition, GetExpeditionError> {
    store
        .get_expedition(query.expedition_id)
        .await?
        .ok_or(GetExpeditionError::NotFound(query.expedition_id))
}
