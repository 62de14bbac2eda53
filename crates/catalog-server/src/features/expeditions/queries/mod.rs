pub mod get;
pub mod list;

pub use get::{GetExpeditionError, GetExpeditionQuery};
pub use list::{ListExpeditionsError, ListExpeditionsQuery, ListExpeditionsResponse};
