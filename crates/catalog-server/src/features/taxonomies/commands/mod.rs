pub mod create;
pub mod delete;
pub mod update;
pub mod update_for_specimen;

pub use create::{CreateTaxonomyCommand, CreateTaxonomyError};
pub use delete::{DeleteTaxonomyCommand, DeleteTaxonomyError, DeleteTaxonomyResponse};
pub use update::{UpdateTaxonomyCommand, UpdateTaxonomyError};
pub use update_for_specimen::{
    UpdateSpecimenTaxonomyCommand, UpdateSpecimenTaxonomyError, UpdateSpecimenTaxonomyResponse,
};
