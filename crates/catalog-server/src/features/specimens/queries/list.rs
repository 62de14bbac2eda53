//! Filtered specimen listing
//!
//! Reads raw query pairs, so unknown keys and odd values never reject the
//! request. A filter that cannot be applied yields an empty page plus an
//! error notice; a page outside the result lands on the last page.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::features::shared::filter::parse_specimen_filter;
use crate::features::shared::notices::Notice;
use crate::features::shared::pagination::{
    clamp_page, parse_page, PaginationMetadata, SPECIMEN_PAGE_SIZE,
};
use crate::models::SpecimenDetail;
use crate::store::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct ListSpecimensQuery {
    /// Query string pairs in request order
    pub params: Vec<(String, String)>,
}

impl ListSpecimensQuery {
    pub fn new(params: Vec<(String, String)>) -> Self {
        Self { params }
    }

    fn raw_page(&self) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListSpecimensResponse {
    pub items: Vec<SpecimenDetail>,
    pub pagination: PaginationMetadata,
    /// Filter values that were applied, by query key
    pub filters: BTreeMap<&'static str, String>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListSpecimensError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Saturates for huge pages; the clamp below then moves to the last page
fn offset_of(page: i64) -> i64 {
    (page - 1).saturating_mul(SPECIMEN_PAGE_SIZE)
}

#[tracing::instrument(skip(store, query), fields(params = query.params.len()))]
pub async fn handle(
    store: &dyn CatalogStore,
    query: ListSpecimensQuery,
) -> Result<ListSpecimensResponse, ListSpecimensError> {
    let pairs = query
        .params
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()));

    let filter = match parse_specimen_filter(pairs) {
        Ok(filter) => filter,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected specimen filter");
            return Ok(ListSpecimensResponse {
                items: Vec::new(),
                pagination: PaginationMetadata::clamped(1, SPECIMEN_PAGE_SIZE, 0),
                filters: BTreeMap::new(),
                notices: vec![Notice::error(format!("Invalid filter parameters: {}", e))],
            });
        },
    };

    let requested = parse_page(query.raw_page());
    let mut page = requested.max(1);
    let mut result = store
        .list_specimens(&filter, SPECIMEN_PAGE_SIZE, offset_of(page))
        .await?;

    let resolved = clamp_page(requested, result.total, SPECIMEN_PAGE_SIZE);
    if resolved != page {
        tracing::debug!(requested, resolved, "Clamped specimen page");
        page = resolved;
        result = store
            .list_specimens(&filter, SPECIMEN_PAGE_SIZE, offset_of(page))
            .await?;
    }

    let filters = filter
        .conditions()
        .iter()
        .map(|(field, value)| (field.key(), value.clone()))
        .collect();

    Ok(ListSpecimensResponse {
        pagination: PaginationMetadata::clamped(page, SPECIMEN_PAGE_SIZE, result.total),
        items: result.items,
        filters,
        notices: Vec::new(),
    })
}
