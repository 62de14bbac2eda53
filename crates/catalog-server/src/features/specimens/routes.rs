//! Specimen API routes
//!
//! # Route Structure
//!
//! - `GET /api/v1/specimens` - Filtered, paginated listing
//! - `POST /api/v1/specimens` - Create a specimen
//! - `GET /api/v1/specimens/:id` - Get a specimen with its references
//! - `PUT /api/v1/specimens/:id` - Update a specimen
//! - `DELETE /api/v1/specimens/:id` - Delete a specimen

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::{
    commands::{
        CreateSpecimenCommand, CreateSpecimenError, DeleteSpecimenCommand, DeleteSpecimenError,
        UpdateSpecimenCommand, UpdateSpecimenError,
    },
    queries::{GetSpecimenError, GetSpecimenQuery, ListSpecimensError, ListSpecimensQuery},
};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn specimens_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_specimens).post(create_specimen))
        .route(
            "/:id",
            get(get_specimen).put(update_specimen).delete(delete_specimen),
        )
}

/// Create a new specimen
///
/// # Response
///
/// - `201 Created` - Specimen with nested expedition and taxonomy
/// - `422 Unprocessable Entity` - Field errors
#[tracing::instrument(skip(state, command))]
async fn create_specimen(
    State(state): State<FeatureState>,
    Json(command): Json<CreateSpecimenCommand>,
) -> Result<Response, SpecimenApiError> {
    let specimen =
        super::commands::create::handle(state.store.as_ref(), command, state.unique_catalog_numbers)
            .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(specimen))).into_response())
}

#[tracing::instrument(skip(state, command), fields(specimen_id = id))]
async fn update_specimen(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdateSpecimenCommand>,
) -> Result<Response, SpecimenApiError> {
    command.specimen_id = id;

    let specimen =
        super::commands::update::handle(state.store.as_ref(), command, state.unique_catalog_numbers)
            .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(specimen))).into_response())
}

/// Delete a specimen
///
/// # Response
///
/// - `204 No Content` - Specimen deleted
/// - `404 Not Found` - No such specimen
#[tracing::instrument(skip(state), fields(specimen_id = id))]
async fn delete_specimen(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, SpecimenApiError> {
    super::commands::delete::handle(
        state.store.as_ref(),
        DeleteSpecimenCommand { specimen_id: id },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[tracing::instrument(skip(state), fields(specimen_id = id))]
async fn get_specimen(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, SpecimenApiError> {
    let specimen =
        super::queries::get::handle(state.store.as_ref(), GetSpecimenQuery { specimen_id: id })
            .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(specimen))).into_response())
}

/// List specimens
///
/// # Endpoint
///
/// `GET /api/v1/specimens?expedition__continent=Europe&taxonomy__genus=homo&page=2`
///
/// Twenty per page, newest first. The response `meta` carries the
/// pagination, the applied filters and any notices.
#[tracing::instrument(skip(state, params))]
async fn list_specimens(
    State(state): State<FeatureState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, SpecimenApiError> {
    let response =
        super::queries::list::handle(state.store.as_ref(), ListSpecimensQuery::new(params))
            .await?;

    tracing::debug!(
        count = response.items.len(),
        total = response.pagination.total,
        "Specimens listed via API"
    );

    let meta = json!({
        "pagination": response.pagination,
        "filters": response.filters,
        "notices": response.notices,
    });

    Ok(
        (StatusCode::OK, Json(ApiResponse::success_with_meta(response.items, meta)))
            .into_response(),
    )
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for specimen API endpoints
#[derive(Debug)]
enum SpecimenApiError {
    Create(CreateSpecimenError),
    Update(UpdateSpecimenError),
    Delete(DeleteSpecimenError),
    Get(GetSpecimenError),
    List(ListSpecimensError),
}

impl From<CreateSpecimenError> for SpecimenApiError {
    fn from(err: CreateSpecimenError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateSpecimenError> for SpecimenApiError {
    fn from(err: UpdateSpecimenError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteSpecimenError> for SpecimenApiError {
    fn from(err: DeleteSpecimenError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetSpecimenError> for SpecimenApiError {
    fn from(err: GetSpecimenError) -> Self {
        Self::Get(err)
    }
}

impl From<ListSpecimensError> for SpecimenApiError {
    fn from(err: ListSpecimensError) -> Self {
        Self::List(err)
    }
}

const NOT_FOUND: &str = "Specimen not found";

impl From<SpecimenApiError> for AppError {
    fn from(err: SpecimenApiError) -> Self {
        match err {
            SpecimenApiError::Create(CreateSpecimenError::Validation(errors))
            | SpecimenApiError::Update(UpdateSpecimenError::Validation(errors)) => {
                AppError::Validation(errors)
            },
            SpecimenApiError::Update(UpdateSpecimenError::NotFound(_))
            | SpecimenApiError::Delete(DeleteSpecimenError::NotFound(_))
            | SpecimenApiError::Get(GetSpecimenError::NotFound(_)) => {
                AppError::NotFound(NOT_FOUND.to_string())
            },
            SpecimenApiError::Create(CreateSpecimenError::Store(e))
            | SpecimenApiError::Update(UpdateSpecimenError::Store(e))
            | SpecimenApiError::Delete(DeleteSpecimenError::Store(e))
            | SpecimenApiError::Get(GetSpecimenError::Store(e))
            | SpecimenApiError::List(ListSpecimensError::Store(e)) => AppError::Store(e),
        }
    }
}

impl IntoResponse for SpecimenApiError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_not_found_maps_to_app_error() {
        let err = SpecimenApiError::from(DeleteSpecimenError::NotFound(4));
        assert!(matches!(AppError::from(err), AppError::NotFound(m) if m == NOT_FOUND));
    }

    #[test]
    fn test_store_error_maps_to_app_error() {
        let err = SpecimenApiError::from(ListSpecimensError::Store(StoreError::Database(
            sqlx::Error::RowNotFound,
        )));
        assert!(matches!(AppError::from(err), AppError::Store(_)));
    }
}
