pub mod get;
pub mod list;

pub use get::{GetSpecimenError, GetSpecimenQuery};
pub use list::{ListSpecimensError, ListSpecimensQuery, ListSpecimensResponse};
