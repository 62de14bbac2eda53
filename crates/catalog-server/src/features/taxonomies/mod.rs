pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateTaxonomyCommand, CreateTaxonomyError, DeleteTaxonomyCommand, DeleteTaxonomyError,
    DeleteTaxonomyResponse, UpdateSpecimenTaxonomyCommand, UpdateSpecimenTaxonomyError,
    UpdateSpecimenTaxonomyResponse, UpdateTaxonomyCommand, UpdateTaxonomyError,
};

pub use queries::{
    GetTaxonomyError, GetTaxonomyQuery, ListTaxonomiesError, ListTaxonomiesQuery,
    ListTaxonomiesResponse,
};

pub use routes::taxonomies_routes;
