//! Shared pagination utilities
//!
//! Two flavours live here. [`PaginationParams`] serves the plain record lists
//! (`page`/`per_page`, validated). The specimen listing instead uses a fixed
//! page size and [`resolve_page`], which never fails: out-of-range pages land
//! on the last page and unreadable ones on the first.
//!
//! # Examples
//!
//! ```rust,ignore
//! use catalog_server::features::shared::pagination::{resolve_page, SPECIMEN_PAGE_SIZE};
//!
//! // 30 specimens, page 3 requested
//! assert_eq!(resolve_page(Some("3"), 30, SPECIMEN_PAGE_SIZE), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Fixed page size of the specimen listing
pub const SPECIMEN_PAGE_SIZE: i64 = 20;

/// Common pagination request parameters
///
/// Used in list queries to specify page and items per page.
/// Provides sensible defaults (page 1, 20 items per page).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    /// Items per page. Defaults to 20, clamped to 1-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

impl PaginationParams {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self { page, per_page }
    }

    /// Get the page number (1-indexed), defaulting to 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Get items per page, defaulting to 20 and clamped to 1-100
    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.per_page())
    }

    /// Validate pagination parameters
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(page) = self.page {
            if page < 1 {
                return Err("Page must be greater than 0");
            }
        }
        if let Some(per_page) = self.per_page {
            if !(1..=100).contains(&per_page) {
                return Err("Per page must be between 1 and 100");
            }
        }
        if (self.page() - 1).checked_mul(self.per_page()).is_none() {
            return Err("Page is out of range");
        }
        Ok(())
    }
}

/// Pagination metadata for response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    /// Current page number (1-indexed)
    pub page: i64,

    pub per_page: i64,

    /// Total number of items
    pub total: i64,

    /// Total number of pages
    pub pages: i64,

    pub has_next: bool,

    pub has_prev: bool,
}

impl PaginationMetadata {
    /// Metadata for a plain list; an empty list has zero pages
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let pages = if total == 0 {
            0
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }

    pub fn from_params(params: &PaginationParams, total: i64) -> Self {
        Self::new(params.page(), params.per_page(), total)
    }

    /// Metadata for a clamped listing, which always has at least one page
    pub fn clamped(page: i64, per_page: i64, total: i64) -> Self {
        let pages = last_page(total, per_page);
        Self {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

/// Wrapper for paginated list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMetadata,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: PaginationMetadata) -> Self {
        Self { items, pagination }
    }

    pub fn from_items(items: Vec<T>, params: &PaginationParams, total: i64) -> Self {
        Self {
            items,
            pagination: PaginationMetadata::from_params(params, total),
        }
    }

    /// Map items to a different type
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

/// Number of the last page; an empty result still has one page
pub fn last_page(total: i64, per_page: i64) -> i64 {
    let per_page = per_page.max(1);
    ((total.max(0) + per_page - 1) / per_page).max(1)
}

/// Parse a raw `page` parameter; anything that is not an integer reads as page 1
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(1)
}

/// Pick the page to show for a raw `page` parameter and a result size
pub fn resolve_page(raw: Option<&str>, total: i64, per_page: i64) -> i64 {
    clamp_page(parse_page(raw), total, per_page)
}

/// Keep `page` if it exists, otherwise use the last page
pub fn clamp_page(page: i64, total: i64, per_page: i64) -> i64 {
    let last = last_page(total, per_page);
    if (1..=last).contains(&page) {
        page
    } else {
        last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_custom() {
        let params = PaginationParams::new(Some(3), Some(50));
        assert_eq!(params.offset(), 100);
    }

    #[test]
    fn test_pagination_params_validation() {
        assert!(PaginationParams::new(Some(1), Some(50)).validate().is_ok());
        assert_eq!(
            PaginationParams::new(Some(0), Some(20)).validate(),
            Err("Page must be greater than 0")
        );
        assert_eq!(
            PaginationParams::new(Some(1), Some(101)).validate(),
            Err("Per page must be between 1 and 100")
        );
        assert_eq!(
            PaginationParams::new(Some(i64::MAX), Some(100)).validate(),
            Err("Page is out of range")
        );
    }

    #[test]
    fn test_offset_saturates() {
        let params = PaginationParams::new(Some(i64::MAX), Some(100));
        assert_eq!(params.offset(), i64::MAX);
    }

    #[test]
    fn test_pagination_metadata() {
        let meta = PaginationMetadata::new(2, 10, 25);
        assert_eq!(meta.pages, 3);
        assert!(meta.has_prev);
        assert!(meta.has_next);

        let empty = PaginationMetadata::new(1, 10, 0);
        assert_eq!(empty.pages, 0);
        assert!(!empty.has_next);
    }

    #[test]
    fn test_clamped_metadata_has_one_page_when_empty() {
        let meta = PaginationMetadata::clamped(1, SPECIMEN_PAGE_SIZE, 0);
        assert_eq!(meta.pages, 1);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_last_page() {
        assert_eq!(last_page(0, 20), 1);
        assert_eq!(last_page(20, 20), 1);
        assert_eq!(last_page(21, 20), 2);
        assert_eq!(last_page(30, 20), 2);
    }

    #[test]
    fn test_resolve_page_clamps() {
        assert_eq!(resolve_page(None, 30, 20), 1);
        assert_eq!(resolve_page(Some("2"), 30, 20), 2);
        assert_eq!(resolve_page(Some("3"), 30, 20), 2);
        assert_eq!(resolve_page(Some("999"), 30, 20), 2);
        assert_eq!(resolve_page(Some("0"), 30, 20), 2);
        assert_eq!(resolve_page(Some("-4"), 30, 20), 2);
    }

    #[test]
    fn test_resolve_page_non_numeric_is_first() {
        assert_eq!(resolve_page(Some("abc"), 30, 20), 1);
        assert_eq!(resolve_page(Some(""), 30, 20), 1);
        assert_eq!(resolve_page(Some("1.5"), 30, 20), 1);
    }

    #[test]
    fn test_paginated_map() {
        let paginated = Paginated::new(vec![1, 2, 3], PaginationMetadata::new(1, 10, 3));
        let mapped = paginated.map(|x| x * 2);
        assert_eq!(mapped.items, vec![2, 4, 6]);
        assert_eq!(mapped.pagination.total, 3);
    }
}
