use serde::{Deserialize, Serialize};

use crate::features::shared::pagination::{Paginated, PaginationParams};
use crate::models::Expedition;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListExpeditionsQuery {
    pub pagination: PaginationParams,
}

pub type ListExpeditionsResponse = Paginated<Expedition>;

#[derive(Debug, thiserror::Error)]
pub enum ListExpeditionsError {
    #[error("{0}")]
    InvalidPagination(&'static str),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    query: ListExpeditionsQuery,
) -> Result<ListExpeditionsResponse, ListExpeditionsError> {
    query
        .pagination
        .validate()
        .map_err(ListExpeditionsError::InvalidPagination)?;

    let page = store
        .list_expeditions(query.pagination.per_page(), query.pagination.offset())
        .await?;

    Ok(Paginated::from_items(page.items, &query.pagination, page.total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpeditionFields;
    use crate::store::MemoryCatalogStore;

    #[tokio::test]
    async fn test_handle_pages_in_id_order() {
        let store = MemoryCatalogStore::new();
        for continent in ["Africa", "Asia", "Europe"] {
            store
                .create_expedition(&ExpeditionFields {
                    expedition: String::new(),
                    continent: continent.to_string(),
                    country: "Chile".to_string(),
                    state_province: None,
                    term: None,
                })
                .await
                .unwrap();
        }

        let query = ListExpeditionsQuery {
            pagination: PaginationParams::new(Some(2), Some(2)),
        };
        let response = handle(&store, query).await.unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].continent, "Europe");
        assert_eq!(response.pagination.pages, 2);
    }

    #[tokio::test]
    async fn test_handle_rejects_bad_page() {
        let store = MemoryCatalogStore::new();
        let query = ListExpeditionsQuery {
            pagination: PaginationParams::new(Some(0), None),
        };
        assert!(matches!(
            handle(&store, query).await,
            Err(ListExpeditionsError::InvalidPagination(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_rejects_overflowing_page() {
        let store = MemoryCatalogStore::new();
        let query = ListExpeditionsQuery {
            pagination: PaginationParams::new(Some(i64::MAX), Some(100)),
        };
        assert!(matches!(
            handle(&store, query).await,
            Err(ListExpeditionsError::InvalidPagination("Page is out of range"))
        ));
    }
}
