pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateExpeditionCommand, CreateExpeditionError, DeleteExpeditionCommand,
    DeleteExpeditionError, DeleteExpeditionResponse, UpdateExpeditionCommand,
    UpdateExpeditionError,
};

pub use queries::{
    GetExpeditionError, GetExpeditionQuery, ListExpeditionsError, ListExpeditionsQuery,
    ListExpeditionsResponse,
};

pub use routes::{expeditions_routes, DELETED_SPECIMENS_HEADER};
