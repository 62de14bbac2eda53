//! Server-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::response::ErrorResponse;
use crate::features::shared::ValidationErrors;
use crate::store::StoreError;

/// Application error rendered into the JSON error envelope
///
/// Feature routes fold their per-operation errors into this type so every
/// endpoint answers with the same status codes and body shape.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::NotFound(message) => ErrorResponse::new("NOT_FOUND", message),
            AppError::Validation(errors) => {
                let details = serde_json::to_value(&errors).unwrap_or_default();
                ErrorResponse::with_details("VALIDATION_ERROR", "Validation failed", details)
            },
            AppError::BadRequest(message) => ErrorResponse::new("BAD_REQUEST", message),
            AppError::Unavailable(message) => {
                tracing::warn!("Service unavailable: {}", message);
                ErrorResponse::new("SERVICE_UNAVAILABLE", message)
            },
            AppError::Store(err) => {
                tracing::error!(error = ?err, "Store error");
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::FieldError;

    #[tokio::test]
    async fn test_validation_error_body() {
        let errors = ValidationErrors::single(
            "catalog_number",
            FieldError::Required {
                label: "Catalog number",
            },
        );
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            json["error"]["details"]["catalog_number"][0],
            "Catalog number is required"
        );
    }

    #[tokio::test]
    async fn test_store_error_is_generic() {
        let err = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["message"], "An internal error occurred");
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(
            AppError::NotFound("Specimen not found".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
