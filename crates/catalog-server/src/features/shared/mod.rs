//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **pagination**: Page parameters, metadata and the clamped specimen paging
//! - **validation**: Field validators and the aggregated error set
//! - **filter**: Query-parameter parsing for the specimen listing
//! - **notices**: Notices carried on page-flow redirects

pub mod filter;
pub mod notices;
pub mod pagination;
pub mod validation;

// Re-export commonly used types
pub use filter::{parse_specimen_filter, FilterError};
pub use notices::{redirect_with_notice, Notice, NoticeLevel};
pub use pagination::{Paginated, PaginationMetadata, PaginationParams, SPECIMEN_PAGE_SIZE};
pub use validation::{FieldError, ValidationErrors};
