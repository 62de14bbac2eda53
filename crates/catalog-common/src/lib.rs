//! Specimen Catalog Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, reference data, and logging for the specimen catalog workspace.
//!
//! # Overview
//!
//! - **Error Handling**: [`CatalogError`] and the crate [`Result`] alias
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//! - **Reference Data**: the continent set and ISO country table used by the
//!   expedition validators
//!
//! # Example
//!
//! ```no_run
//! use catalog_common::reference::ReferenceData;
//!
//! let reference = ReferenceData::builtin();
//! assert_eq!(reference.continent("north america"), Some("North America"));
//! let country = reference.resolve_country("fr").map(|c| c.name.clone());
//! assert_eq!(country.as_deref(), Some("France"));
//! ```

pub mod error;
pub mod logging;
pub mod reference;

// Re-export commonly used types
pub use error::{CatalogError, Result};
