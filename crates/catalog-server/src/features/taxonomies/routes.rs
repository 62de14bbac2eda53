//! Taxonomy API routes
//!
//! # Route Structure
//!
//! - `GET /api/v1/taxonomies` - List taxonomies (`page`, `per_page`)
//! - `POST /api/v1/taxonomies` - Create a taxonomy
//! - `GET /api/v1/taxonomies/:id` - Get a taxonomy
//! - `PUT /api/v1/taxonomies/:id` - Update a taxonomy
//! - `DELETE /api/v1/taxonomies/:id` - Delete a taxonomy and its specimens
//! - `PUT /api/v1/taxonomies/specimen/:specimen_id` - Edit (or create) a
//!   specimen's taxonomy

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use super::{
    commands::{
        CreateTaxonomyCommand, CreateTaxonomyError, DeleteTaxonomyCommand, DeleteTaxonomyError,
        UpdateSpecimenTaxonomyCommand, UpdateSpecimenTaxonomyError, UpdateTaxonomyCommand,
        UpdateTaxonomyError,
    },
    queries::{GetTaxonomyError, GetTaxonomyQuery, ListTaxonomiesError, ListTaxonomiesQuery},
};
use crate::api::response::ApiResponse;
use crate::error::AppError;
use crate::features::expeditions::DELETED_SPECIMENS_HEADER;
use crate::features::shared::PaginationParams;
use crate::features::FeatureState;

pub fn taxonomies_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(list_taxonomies).post(create_taxonomy))
        .route(
            "/:id",
            get(get_taxonomy).put(update_taxonomy).delete(delete_taxonomy),
        )
        .route("/specimen/:specimen_id", put(update_specimen_taxonomy))
}

#[tracing::instrument(skip(state, command))]
async fn create_taxonomy(
    State(state): State<FeatureState>,
    Json(command): Json<CreateTaxonomyCommand>,
) -> Result<Response, TaxonomyApiError> {
    let taxonomy = super::commands::create::handle(state.store.as_ref(), command).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(taxonomy))).into_response())
}

#[tracing::instrument(skip(state, command), fields(taxonomy_id = id))]
async fn update_taxonomy(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdateTaxonomyCommand>,
) -> Result<Response, TaxonomyApiError> {
    command.taxonomy_id = id;

    let taxonomy = super::commands::update::handle(state.store.as_ref(), command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(taxonomy))).into_response())
}

/// Save the taxonomy of a specimen
///
/// # Response
///
/// - `200 OK` - Existing taxonomy updated
/// - `201 Created` - New taxonomy created and linked
/// - `404 Not Found` - No such specimen
#[tracing::instrument(skip(state, command))]
async fn update_specimen_taxonomy(
    State(state): State<FeatureState>,
    Path(specimen_id): Path<i64>,
    Json(mut command): Json<UpdateSpecimenTaxonomyCommand>,
) -> Result<Response, TaxonomyApiError> {
    command.specimen_id = specimen_id;

    let response =
        super::commands::update_for_specimen::handle(state.store.as_ref(), command).await?;

    let status = if response.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(state), fields(taxonomy_id = id))]
async fn delete_taxonomy(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, TaxonomyApiError> {
    let response = super::commands::delete::handle(
        state.store.as_ref(),
        DeleteTaxonomyCommand { taxonomy_id: id },
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

#[tracing::instrument(skip(state), fields(taxonomy_id = id))]
async fn get_taxonomy(
    State(state): State<FeatureState>,
    Path(id): Path<i64>,
) -> Result<Response, TaxonomyApiError> {
    let taxonomy =
        super::queries::get::handle(state.store.as_ref(), GetTaxonomyQuery { taxonomy_id: id })
            .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(taxonomy))).into_response())
}

#[tracing::instrument(skip(state), fields(page = ?pagination.page, per_page = ?pagination.per_page))]
async fn list_taxonomies(
    State(state): State<FeatureState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, TaxonomyApiError> {
    let response = super::queries::list::handle(
        state.store.as_ref(),
        ListTaxonomiesQuery { pagination },
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
enum TaxonomyApiError {
    Create(CreateTaxonomyError),
    Update(UpdateTaxonomyError),
    UpdateForSpecimen(UpdateSpecimenTaxonomyError),
    Delete(DeleteTaxonomyError),
    Get(GetTaxonomyError),
    List(ListTaxonomiesError),
}

impl From<CreateTaxonomyError> for TaxonomyApiError {
    fn from(err: CreateTaxonomyError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateTaxonomyError> for TaxonomyApiError {
    fn from(err: UpdateTaxonomyError) -> Self {
        Self::Update(err)
    }
}

impl From<UpdateSpecimenTaxonomyError> for TaxonomyApiError {
    fn from(err: UpdateSpecimenTaxonomyError) -> Self {
        Self::UpdateForSpecimen(err)
    }
}

impl From<DeleteTaxonomyError> for TaxonomyApiError {
    fn from(err: DeleteTaxonomyError) -> Self {
        Self::Delete(err)
    }
}

impl From<GetTaxonomyError> for TaxonomyApiError {
    fn from(err: GetTaxonomyError) -> Self {
        Self::Get(err)
    }
}

impl From<ListTaxonomiesError> for TaxonomyApiError {
    fn from(err: ListTaxonomiesError) -> Self {
        Self::List(err)
    }
}

impl From<TaxonomyApiError> for AppError {
    fn from(err: TaxonomyApiError) -> Self {
        match err {
            TaxonomyApiError::Create(CreateTaxonomyError::Validation(errors))
            | TaxonomyApiError::Update(UpdateTaxonomyError::Validation(errors))
            | TaxonomyApiError::UpdateForSpecimen(UpdateSpecimenTaxonomyError::Validation(
                errors,
            )) => AppError::Validation(errors),
            TaxonomyApiError::Update(UpdateTaxonomyError::NotFound(_))
            | TaxonomyApiError::Delete(DeleteTaxonomyError::NotFound(_))
            | TaxonomyApiError::Get(GetTaxonomyError::NotFound(_)) => {
                AppError::NotFound("Taxonomy not found".to_string())
            },
            TaxonomyApiError::UpdateForSpecimen(UpdateSpecimenTaxonomyError::SpecimenNotFound(
                _,
            )) => AppError::NotFound("Specimen not found".to_string()),
            TaxonomyApiError::List(ListTaxonomiesError::InvalidPagination(message)) => {
                AppError::BadRequest(message.to_string())
            },
            TaxonomyApiError::Create(CreateTaxonomyError::Store(e))
            | TaxonomyApiError::Update(UpdateTaxonomyError::Store(e))
            | TaxonomyApiError::UpdateForSpecimen(UpdateSpecimenTaxonomyError::Store(e))
            | TaxonomyApiError::Delete(DeleteTaxonomyError::Store(e))
            | TaxonomyApiError::Get(GetTaxonomyError::Store(e))
            | TaxonomyApiError::List(ListTaxonomiesError::Store(e)) => AppError::Store(e),
        }
    }
}

impl IntoResponse for TaxonomyApiError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
