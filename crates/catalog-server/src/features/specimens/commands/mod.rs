pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateSpecimenCommand, CreateSpecimenError};
pub use delete::{DeleteSpecimenCommand, DeleteSpecimenError, DeleteSpecimenResponse};
pub use update::{UpdateSpecimenCommand, UpdateSpecimenError};

use crate::features::shared::validation::{FieldError, ValidationErrors};

/// Field error for a reference the store could not resolve
pub(crate) fn missing_reference(entity: &'static str, id: i64) -> ValidationErrors {
    let field = match entity {
        "Taxonomy" => "taxonomy_id",
        _ => "expedition_id",
    };
    ValidationErrors::single(
        field,
        FieldError::InvalidChoice {
            label: entity,
            value: id.to_string(),
        },
    )
}

pub(crate) fn catalog_number_taken(catalog_number: &str) -> ValidationErrors {
    ValidationErrors::single(
        "catalog_number",
        FieldError::Taken {
            label: "Catalog number",
            value: catalog_number.to_string(),
        },
    )
}
