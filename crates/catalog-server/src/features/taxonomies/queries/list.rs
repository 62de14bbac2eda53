use serde::{Deserialize, Serialize};

use crate::features::shared::pagination::{Paginated, PaginationParams};
use crate::models::Taxonomy;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListTaxonomiesQuery {
    pub pagination: PaginationParams,
}

pub type ListTaxonomiesResponse = Paginated<Taxonomy>;

#[derive(Debug, thiserror::Error)]
pub enum ListTaxonomiesError {
    #[error("{0}")]
    InvalidPagination(&'static str),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: &dyn CatalogStore,
    query: ListTaxonomiesQuery,
) -> Result<ListTaxonomiesResponse, ListTaxonomiesError> {
    query
        .pagination
        .validate()
        .map_err(ListTaxonomiesError::InvalidPagination)?;

    let page = store
        .list_taxonomies(query.pagination.per_page(), query.pagination.offset())
        .await?;

    Ok(Paginated::from_items(page.items, &query.pagination, page.total))
}
