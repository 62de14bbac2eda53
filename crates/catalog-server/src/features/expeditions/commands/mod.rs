pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateExpeditionCommand, CreateExpeditionError};
pub use delete::{DeleteExpeditionCommand, DeleteExpeditionError, DeleteExpeditionResponse};
pub use update::{UpdateExpeditionCommand, UpdateExpeditionError};
