pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateSpecimenCommand, CreateSpecimenError, DeleteSpecimenCommand, DeleteSpecimenError,
    DeleteSpecimenResponse, UpdateSpecimenCommand, UpdateSpecimenError,
};

pub use queries::{
    GetSpecimenError, GetSpecimenQuery, ListSpecimensError, ListSpecimensQuery,
    ListSpecimensResponse,
};

pub use routes::specimens_routes;
