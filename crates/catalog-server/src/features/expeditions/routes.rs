//! Expedition API routes
//!
//! # Route Structure
//!
//! - `GET /api/v1/expeditions` - List expeditions (`page`, `per_page`)
//! - `POST /api/v1/expeditions` - Create an expedition
//! - `GET /api/v1/expeditions/:id` - Get an expedition
//! - `PUT /api/v1/expeditions/:id` - Update an expedition
//! - `DELETE /api/v1/expeditions/:id` - Delete an expedition and its specimens

use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::{
    commands::{
        CreateExpeditionCommand, CreateExpeditionError, DeleteExpeditionCommand,
        DeleteExpeditionError, UpdateExpeditionCommand, UpdateExpeditionError,
    },
    queries::{GetExpeditionError, GetExpeditionQuery, ListExpeditionsError, ListExpeditionsQuery},
};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::shared::PaginationParams;
use crate::features::FeatureState;

/// Header reporting how many specimens a cascading delete removed
pub const DELETED_SPECIMENS_HEADER: HeaderName = HeaderName::from_static("x-deleted-specimens");

pub fn expeditions_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_expeditions).post(create_expedition))
        .route(
            "/:id",
            get(get_expedition)
                .put(update_expedition)
                .delete(delete_expedition),
        )
}

#[tracing::instrument(skip(state, command))]
async fn create_expedition(
    State(state): State<FeatureState>,
    Json(command): Json<CreateExpeditionCommand>,
) -> Result<Response, ExpeditionApiError> {
    let expedition =
        super::commands::create::handle(state.store.as_ref(), &state.reference, command).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(expedition))).into_response())
}

#[tracing::instrument(skip(state, command), fields(expedition_id = id))]
async fn update_expedition(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdateExpeditionCommand>,
) -> Result<Response, ExpeditionApiError> {
    command.expedition_id = id;

    let expedition =
        super::commands::update::handle(state.store.as_ref(), &state.reference, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(expedition))).into_response())
}

/// Delete an expedition
///
/// # Response
///
/// - `204 No Content` - Deleted; `x-deleted-specimens` holds the number of
///   specimens removed with it
/// - `404 Not Found` - No such expedition
#[tracing::instrument(skip(state), fields(expedition_id = id))]
async fn delete_expedition(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, ExpeditionApiError> {
    let response = super::commands::delete::handle(
        state.store.as_ref(),
        DeleteExpeditionCommand { expedition_id: id },
    )
    .await?;

    Ok((
        StatusCode::NO_CONTENT,
        [(
            DELETED_SPECIMENS_HEADER,
            HeaderValue::from(response.deleted_specimens),
        )],
    )
        .into_response())
}

#[tracing::instrument(skip(state), fields(expedition_id = id))]
async fn get_expedition(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, ExpeditionApiError> {
    let expedition = super::queries::get::handle(
        state.store.as_ref(),
        GetExpeditionQuery { expedition_id: id },
    )
    .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(expedition))).into_response())
}

#[tracing::instrument(skip(state), fields(page = ?pagination.page, per_page = ?pagination.per_page))]
async fn list_expeditions(
    State(state): State<FeatureState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, ExpeditionApiError> {
    let response = super::queries::list::handle(
        state.store.as_ref(),
        ListExpeditionsQuery { pagination },
    )
    .await?;

    let meta = json!({
        "pagination": response.pagination
    });

    Ok(
        (StatusCode::OK, Json(ApiResponse::success_with_meta(response.items, meta)))
            .into_response(),
    )
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum ExpeditionApiError {
    Create(CreateExpeditionError),
    Update(UpdateExpeditionError),
    Delete(DeleteExpeditionError),
    Get(GetExpeditionError),
    List(ListExpeditionsError),
}

impl From<CreateExpeditionError> for ExpeditionApiError {
    fn from(err: CreateExpeditionError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateExpeditionError> for ExpeditionApiError {
    fn from(err: UpdateExpeditionError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteExpeditionError> for ExpeditionApiError {
    fn from(err: DeleteExpeditionError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetExpeditionError> for ExpeditionApiError {
    fn from(err: GetExpeditionError) -> Self {
        Self::Get(err)
    }
}

impl From<ListExpeditionsError> for ExpeditionApiError {
    fn from(err: ListExpeditionsError) -> Self {
        Self::List(err)
    }
}

const NOT_FOUND: &str = "Expedition not found";

impl From<ExpeditionApiError> for AppError {
    fn from(err: ExpeditionApiError) -> Self {
        match err {
            ExpeditionApiError::Create(CreateExpeditionError::Validation(errors))
            | ExpeditionApiError::Update(UpdateExpeditionError::Validation(errors)) => {
                AppError::Validation(errors)
            },
            ExpeditionApiError::Update(UpdateExpeditionError::NotFound(_))
            | ExpeditionApiError::Delete(DeleteExpeditionError::NotFound(_))
            | ExpeditionApiError::Get(GetExpeditionError::NotFound(_)) => {
                AppError::NotFound(NOT_FOUND.to_string())
            },
            ExpeditionApiError::List(ListExpeditionsError::InvalidPagination(message)) => {
                AppError::BadRequest(message.to_string())
            },
            ExpeditionApiError::Create(CreateExpeditionError::Store(e))
            | ExpeditionApiError::Update(UpdateExpeditionError::Store(e))
            | ExpeditionApiError::Delete(DeleteExpeditionError::Store(e))
            | ExpeditionApiError::Get(GetExpeditionError::Store(e))
            | ExpeditionApiError::List(ListExpeditionsError::Store(e)) => AppError::Store(e),
        }
    }
}

impl IntoResponse for ExpeditionApiError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pagination_is_bad_request() {
        let err = ExpeditionApiError::from(ListExpeditionsError::InvalidPagination(
            "Page must be greater than 0",
        ));
        assert_eq!(AppError::from(err).status(), StatusCode::BAD_REQUEST);
    }
}
