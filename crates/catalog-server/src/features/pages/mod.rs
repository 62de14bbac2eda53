//! Page-level flows
//!
//! The form-and-redirect surface of the catalog. Pages reuse the same
//! commands and queries as the JSON API and report outcomes as notices.

pub mod models;
pub mod routes;

pub use routes::pages_routes;
