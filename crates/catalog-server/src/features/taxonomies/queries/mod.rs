pub mod get;
pub mod list;

pub use get::{GetTaxonomyError, GetTaxonomyQuery};
pub use list::{ListTaxonomiesError, ListTaxonomiesQuery, ListTaxonomiesResponse};
