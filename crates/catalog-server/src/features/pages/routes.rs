//! Page and form routes
//!
//! Each GET answers with the JSON model of the page. Form posts are
//! `application/x-www-form-urlencoded`; a successful post answers
//! `303 See Other` with a notice attached to the target, an invalid one
//! answers `422` with the form model. Missing records and store failures
//! redirect to the listing with an error notice.
//!
//! # Route Structure
//!
//! - `GET /` - Home
//! - `GET /all_specimens` - Filtered, paginated listing
//! - `GET /specimen/detail/:id` - Specimen detail
//! - `GET|POST /specimen/:id/update` - Edit a specimen's catalog number
//! - `GET|POST /specimen/:id/delete` - Confirm and delete a specimen
//! - `GET|POST /expedition_update/:id` - Edit an expedition
//! - `GET|POST /taxonomy_update/:specimen_id` - Edit a specimen's taxonomy
//! - `GET|POST /new_specimen`, `/new_taxonomy`, `/new_expedition` - Creation forms

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Form, Json, Router,
};

use super::models::{
    CatalogNumberForm, Choice, ConfirmDeletePage, FilterInput, FormField, FormPage, HomePage,
    SpecimenDetailPage, SpecimenListPage,
};
use crate::features::expeditions::{
    CreateExpeditionCommand, CreateExpeditionError, GetExpeditionError, GetExpeditionQuery,
    UpdateExpeditionCommand, UpdateExpeditionError,
};
use crate::features::shared::validation::{ExpeditionInput, TaxonomyInput};
use crate::features::shared::{redirect_with_notice, Notice, ValidationErrors};
use crate::features::specimens::{
    CreateSpecimenCommand, CreateSpecimenError, DeleteSpecimenCommand, DeleteSpecimenError,
    GetSpecimenError, GetSpecimenQuery, ListSpecimensQuery, UpdateSpecimenCommand,
    UpdateSpecimenError,
};
use crate::features::taxonomies::{
    CreateTaxonomyCommand, CreateTaxonomyError, UpdateSpecimenTaxonomyCommand,
    UpdateSpecimenTaxonomyError,
};
use crate::features::FeatureState;
use crate::models::{SpecimenDetail, TaxonomyFields};
use crate::store::{CatalogStore, StoreResult};

const LISTING: &str = "/all_specimens";
const NEW_SPECIMEN: &str = "/new_specimen";

const SPECIMEN_NOT_FOUND: &str = "Specimen not found";
const EXPEDITION_NOT_FOUND: &str = "Expedition not found";
const UNEXPECTED: &str = "Something went wrong. Please try again.";

/// Upper bound on the options offered by the reference selects
const CHOICE_LIMIT: i64 = 1000;

type Params = Query<Vec<(String, String)>>;

pub fn pages_routes() -> Router<FeatureState> {
    Router::new()
        .route("/", get(home))
        .route("/all_specimens", get(all_specimens))
        .route("/specimen/detail/:id", get(specimen_detail))
        .route("/specimen/:id/update", get(edit_specimen).post(save_specimen))
        .route("/specimen/:id/delete", get(confirm_delete).post(delete_specimen))
        .route(
            "/expedition_update/:id",
            get(edit_expedition).post(save_expedition),
        )
        .route(
            "/taxonomy_update/:specimen_id",
            get(edit_taxonomy).post(save_taxonomy),
        )
        .route("/new_specimen", get(new_specimen_form).post(create_specimen))
        .route("/new_taxonomy", get(new_taxonomy_form).post(create_taxonomy))
        .route(
            "/new_expedition",
            get(new_expedition_form).post(create_expedition),
        )
}

// ============================================================================
// Helpers
// ============================================================================

fn notices_from(params: &[(String, String)]) -> Vec<Notice> {
    Notice::from_pairs(params).into_iter().collect()
}

fn detail_path(specimen_id: i64) -> String {
    format!("/specimen/detail/{}", specimen_id)
}

fn not_found(message: &str) -> Response {
    redirect_with_notice(LISTING, &Notice::error(message))
}

fn unexpected(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "Page flow failed");
    redirect_with_notice(LISTING, &Notice::error(UNEXPECTED))
}

/// Parse an id from the path, redirecting to the listing when it is not a number
fn path_id(raw: &str, missing: &str) -> Result<i64, Response> {
    raw.parse().map_err(|_| not_found(missing))
}

async fn load_specimen(store: &dyn CatalogStore, specimen_id: i64) -> Result<SpecimenDetail, Response> {
    match crate::features::specimens::queries::get::handle(store, GetSpecimenQuery { specimen_id })
        .await
    {
        Ok(specimen) => Ok(specimen),
        Err(GetSpecimenError::NotFound(_)) => Err(not_found(SPECIMEN_NOT_FOUND)),
        Err(GetSpecimenError::Store(e)) => Err(unexpected(e)),
    }
}

async fn specimen_choices(store: &dyn CatalogStore) -> StoreResult<(Vec<Choice>, Vec<Choice>)> {
    let expeditions = store.list_expeditions(CHOICE_LIMIT, 0).await?;
    let taxonomies = store.list_taxonomies(CHOICE_LIMIT, 0).await?;
    Ok((
        expeditions.items.iter().map(Choice::from).collect(),
        taxonomies.items.iter().map(Choice::from).collect(),
    ))
}

async fn specimen_form(
    state: &FeatureState,
    values: CreateSpecimenCommand,
    errors: ValidationErrors,
    notices: Vec<Notice>,
) -> Response {
    match specimen_choices(state.store.as_ref()).await {
        Ok((expeditions, taxonomies)) => FormPage::new(
            "New specimen",
            NEW_SPECIMEN,
            FormField::specimen(),
            values,
        )
        .with_choices("expedition_id", expeditions)
        .with_choices("taxonomy_id", taxonomies)
        .with_errors(errors)
        .with_notices(notices)
        .render(),
        Err(e) => unexpected(e),
    }
}

fn expedition_form(
    state: &FeatureState,
    title: &'static str,
    action: String,
    values: ExpeditionInput,
) -> FormPage<ExpeditionInput> {
    let continents = state
        .reference
        .continents()
        .iter()
        .map(|c| Choice {
            value: c.clone(),
            label: c.clone(),
        })
        .collect();
    FormPage::new(title, action, FormField::expedition(), values)
        .with_choices("continent", continents)
}

fn taxonomy_form(title: &'static str, action: String, values: TaxonomyInput) -> FormPage<TaxonomyInput> {
    FormPage::new(title, action, FormField::taxonomy(), values)
}

// ============================================================================
// Listing and detail
// ============================================================================

async fn home(Query(params): Params) -> Response {
    Json(HomePage::new(notices_from(&params))).into_response()
}

#[tracing::instrument(skip(state, params))]
async fn all_specimens(State(state): State<FeatureState>, Query(params): Params) -> Response {
    let mut notices = notices_from(&params);

    match crate::features::specimens::queries::list::handle(
        state.store.as_ref(),
        ListSpecimensQuery::new(params),
    )
    .await
    {
        Ok(response) => {
            notices.extend(response.notices);
            Json(SpecimenListPage {
                specimens: response.items,
                pagination: response.pagination,
                filters: FilterInput::all(&response.filters),
                notices,
            })
            .into_response()
        },
        Err(e) => {
            tracing::error!(error = %e, "Specimen listing failed");
            redirect_with_notice("/", &Notice::error(UNEXPECTED))
        },
    }
}

#[tracing::instrument(skip(state, params))]
async fn specimen_detail(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Response {
    let id = match path_id(&id, SPECIMEN_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match load_specimen(state.store.as_ref(), id).await {
        Ok(specimen) => Json(SpecimenDetailPage {
            specimen,
            notices: notices_from(&params),
        })
        .into_response(),
        Err(response) => response,
    }
}

// ============================================================================
// Specimen edit and delete
// ============================================================================

#[tracing::instrument(skip(state))]
async fn edit_specimen(State(state): State<FeatureState>, Path(id): Path<String>) -> Response {
    let id = match path_id(&id, SPECIMEN_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match load_specimen(state.store.as_ref(), id).await {
        Ok(specimen) => FormPage::new(
            "Update specimen",
            format!("/specimen/{}/update", id),
            FormField::catalog_number(),
            CatalogNumberForm {
                catalog_number: specimen.catalog_number,
            },
        )
        .render(),
        Err(response) => response,
    }
}

#[tracing::instrument(skip(state, form))]
async fn save_specimen(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
    Form(form): Form<CatalogNumberForm>,
) -> Response {
    let id = match path_id(&id, SPECIMEN_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let specimen = match load_specimen(state.store.as_ref(), id).await {
        Ok(specimen) => specimen,
        Err(response) => return response,
    };

    let command = UpdateSpecimenCommand::catalog_number_only(&specimen, form.catalog_number.clone());
    match crate::features::specimens::commands::update::handle(
        state.store.as_ref(),
        command,
        state.unique_catalog_numbers,
    )
    .await
    {
        Ok(updated) => redirect_with_notice(
            &detail_path(updated.specimen_id),
            &Notice::success("Specimen updated successfully."),
        ),
        Err(UpdateSpecimenError::Validation(errors)) => FormPage::new(
            "Update specimen",
            format!("/specimen/{}/update", id),
            FormField::catalog_number(),
            form,
        )
        .with_errors(errors)
        .render(),
        Err(UpdateSpecimenError::NotFound(_)) => not_found(SPECIMEN_NOT_FOUND),
        Err(UpdateSpecimenError::Store(e)) => unexpected(e),
    }
}

#[tracing::instrument(skip(state))]
async fn confirm_delete(State(state): State<FeatureState>, Path(id): Path<String>) -> Response {
    let id = match path_id(&id, SPECIMEN_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match load_specimen(state.store.as_ref(), id).await {
        Ok(specimen) => Json(ConfirmDeletePage {
            specimen,
            action: format!("/specimen/{}/delete", id),
        })
        .into_response(),
        Err(response) => response,
    }
}

#[tracing::instrument(skip(state))]
async fn delete_specimen(State(state): State<FeatureState>, Path(id): Path<String>) -> Response {
    let id = match path_id(&id, SPECIMEN_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match crate::features::specimens::commands::delete::handle(
        state.store.as_ref(),
        DeleteSpecimenCommand { specimen_id: id },
    )
    .await
    {
        Ok(_) => redirect_with_notice(LISTING, &Notice::success("Specimen deleted successfully.")),
        Err(DeleteSpecimenError::NotFound(_)) => not_found(SPECIMEN_NOT_FOUND),
        Err(DeleteSpecimenError::Store(e)) => unexpected(e),
    }
}

// ============================================================================
// Expedition and taxonomy edits
// ============================================================================

#[tracing::instrument(skip(state))]
async fn edit_expedition(State(state): State<FeatureState>, Path(id): Path<String>) -> Response {
    let id = match path_id(&id, EXPEDITION_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match crate::features::expeditions::queries::get::handle(
        state.store.as_ref(),
        GetExpeditionQuery { expedition_id: id },
    )
    .await
    {
        Ok(expedition) => {
            let values = ExpeditionInput::from(&crate::models::ExpeditionFields::from(&expedition));
            expedition_form(
                &state,
                "Update expedition",
                format!("/expedition_update/{}", id),
                values,
            )
            .render()
        },
        Err(GetExpeditionError::NotFound(_)) => not_found(EXPEDITION_NOT_FOUND),
        Err(GetExpeditionError::Store(e)) => unexpected(e),
    }
}

#[tracing::instrument(skip(state, input))]
async fn save_expedition(
    State(state): State<FeatureState>,
    Path(id): Path<String>,
    Form(input): Form<ExpeditionInput>,
) -> Response {
    let id = match path_id(&id, EXPEDITION_NOT_FOUND) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let command = UpdateExpeditionCommand {
        expedition_id: id,
        input: input.clone(),
    };

    match crate::features::expeditions::commands::update::handle(
        state.store.as_ref(),
        &state.reference,
        command,
    )
    .await
    {
        Ok(expedition) => {
            let target = match state
                .store
                .first_specimen_for_expedition(expedition.expedition_id)
                .await
            {
                Ok(Some(specimen_id)) => detail_path(specimen_id),
                Ok(None) => LISTING.to_string(),
                Err(e) => return unexpected(e),
            };
            redirect_with_notice(&target, &Notice::success("Expedition updated successfully."))
        },
        Err(UpdateExpeditionError::Validation(errors)) => expedition_form(
            &state,
            "Update expedition",
            format!("/expedition_update/{}", id),
            input,
        )
        .with_errors(errors)
        .render(),
        Err(UpdateExpeditionError::NotFound(_)) => not_found(EXPEDITION_NOT_FOUND),
        Err(UpdateExpeditionError::Store(e)) => unexpected(e),
    }
}

#[tracing::instrument(skip(state))]
async fn edit_taxonomy(
    State(state): State<FeatureState>,
    Path(specimen_id): Path<String>,
) -> Response {
    let specimen_id = match path_id(&specimen_id, SPECIMEN_NOT_FOUND) {
        Ok(specimen_id) => specimen_id,
        Err(response) => return response,
    };
    match load_specimen(state.store.as_ref(), specimen_id).await {
        Ok(specimen) => {
            let values = specimen
                .taxonomy
                .as_ref()
                .map(|t| TaxonomyInput::from(&TaxonomyFields::from(t)))
                .unwrap_or_default();
            taxonomy_form(
                "Update taxonomy",
                format!("/taxonomy_update/{}", specimen_id),
                values,
            )
            .render()
        },
        Err(response) => response,
    }
}

#[tracing::instrument(skip(state, input))]
async fn save_taxonomy(
    State(state): State<FeatureState>,
    Path(specimen_id): Path<String>,
    Form(input): Form<TaxonomyInput>,
) -> Response {
    let specimen_id = match path_id(&specimen_id, SPECIMEN_NOT_FOUND) {
        Ok(specimen_id) => specimen_id,
        Err(response) => return response,
    };
    let command = UpdateSpecimenTaxonomyCommand {
        specimen_id,
        input: input.clone(),
    };

    match crate::features::taxonomies::commands::update_for_specimen::handle(
        state.store.as_ref(),
        command,
    )
    .await
    {
        Ok(response) => {
            let message = if response.created {
                "New taxonomy created successfully."
            } else {
                "Taxonomy updated successfully."
            };
            redirect_with_notice(&detail_path(specimen_id), &Notice::success(message))
        },
        Err(UpdateSpecimenTaxonomyError::Validation(errors)) => taxonomy_form(
            "Update taxonomy",
            format!("/taxonomy_update/{}", specimen_id),
            input,
        )
        .with_errors(errors)
        .render(),
        Err(UpdateSpecimenTaxonomyError::SpecimenNotFound(_)) => not_found(SPECIMEN_NOT_FOUND),
        Err(UpdateSpecimenTaxonomyError::Store(e)) => unexpected(e),
    }
}

// ============================================================================
// Creation forms
// ============================================================================

#[tracing::instrument(skip(state, params))]
async fn new_specimen_form(State(state): State<FeatureState>, Query(params): Params) -> Response {
    specimen_form(
        &state,
        CreateSpecimenCommand::default(),
        ValidationErrors::new(),
        notices_from(&params),
    )
    .await
}

#[tracing::instrument(skip(state, command))]
async fn create_specimen(
    State(state): State<FeatureState>,
    Form(command): Form<CreateSpecimenCommand>,
) -> Response {
    match crate::features::specimens::commands::create::handle(
        state.store.as_ref(),
        command.clone(),
        state.unique_catalog_numbers,
    )
    .await
    {
        Ok(specimen) => redirect_with_notice(
            &detail_path(specimen.specimen_id),
            &Notice::success("New specimen created successfully."),
        ),
        Err(CreateSpecimenError::Validation(errors)) => {
            specimen_form(&state, command, errors, Vec::new()).await
        },
        Err(CreateSpecimenError::Store(e)) => unexpected(e),
    }
}

async fn new_taxonomy_form(Query(params): Params) -> Response {
    taxonomy_form("New taxonomy", "/new_taxonomy".to_string(), TaxonomyInput::default())
        .with_notices(notices_from(&params))
        .render()
}

#[tracing::instrument(skip(state, input))]
async fn create_taxonomy(
    State(state): State<FeatureState>,
    Form(input): Form<TaxonomyInput>,
) -> Response {
    let command = CreateTaxonomyCommand {
        input: input.clone(),
    };

    match crate::features::taxonomies::commands::create::handle(state.store.as_ref(), command).await
    {
        Ok(_) => redirect_with_notice(
            NEW_SPECIMEN,
            &Notice::success("New taxonomy created successfully."),
        ),
        Err(CreateTaxonomyError::Validation(errors)) => {
            taxonomy_form("New taxonomy", "/new_taxonomy".to_string(), input)
                .with_errors(errors)
                .render()
        },
        Err(CreateTaxonomyError::Store(e)) => unexpected(e),
    }
}

async fn new_expedition_form(State(state): State<FeatureState>, Query(params): Params) -> Response {
    expedition_form(
        &state,
        "New expedition",
        "/new_expedition".to_string(),
        ExpeditionInput::default(),
    )
    .with_notices(notices_from(&params))
    .render()
}

#[tracing::instrument(skip(state, input))]
async fn create_expedition(
    State(state): State<FeatureState>,
    Form(input): Form<ExpeditionInput>,
) -> Response {
    let command = CreateExpeditionCommand {
        input: input.clone(),
    };

    match crate::features::expeditions::commands::create::handle(
        state.store.as_ref(),
        &state.reference,
        command,
    )
    .await
    {
        Ok(_) => redirect_with_notice(
            NEW_SPECIMEN,
            &Notice::success("New expedition created successfully."),
        ),
        Err(CreateExpeditionError::Validation(errors)) => expedition_form(
            &state,
            "New expedition",
            "/new_expedition".to_string(),
            input,
        )
        .with_errors(errors)
        .render(),
        Err(CreateExpeditionError::Store(e)) => unexpected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path(12), "/specimen/detail/12");
    }

    #[test]
    fn test_path_id() {
        assert_eq!(path_id("42", SPECIMEN_NOT_FOUND).ok(), Some(42));

        let response = path_id("abc", EXPEDITION_NOT_FOUND).unwrap_err();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[axum::http::header::LOCATION]
            .to_str()
            .unwrap();
        assert!(location.starts_with("/all_specimens?notice=Expedition"));
    }

    #[test]
    fn test_unexpected_redirects_to_listing() {
        let response = unexpected("boom");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()[axum::http::header::LOCATION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(location.starts_with("/all_specimens?notice="));
        assert!(location.ends_with("&level=error"));
    }
}
