//! Page models
//!
//! What each page would render, serialized as JSON. Form pages echo the
//! submitted values next to their per-field errors.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::features::shared::filter::filter_label;
use crate::features::shared::validation::TAXONOMY_LABELS;
use crate::features::shared::{Notice, PaginationMetadata, ValidationErrors};
use crate::models::{Expedition, SpecimenDetail, Taxonomy};
use crate::store::FilterField;

#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub links: Vec<PageLink>,
    pub notices: Vec<Notice>,
}

impl HomePage {
    pub fn new(notices: Vec<Notice>) -> Self {
        Self {
            title: "Specimen Catalog",
            links: vec![
                PageLink {
                    label: "All specimens",
                    href: "/all_specimens",
                },
                PageLink {
                    label: "New specimen",
                    href: "/new_specimen",
                },
                PageLink {
                    label: "New taxonomy",
                    href: "/new_taxonomy",
                },
                PageLink {
                    label: "New expedition",
                    href: "/new_expedition",
                },
            ],
            notices,
        }
    }
}

/// One input of the listing's filter form
#[derive(Debug, Clone, Serialize)]
pub struct FilterInput {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl FilterInput {
    /// Every filter input, pre-filled with the applied values
    pub fn all(applied: &BTreeMap<&'static str, String>) -> Vec<Self> {
        FilterField::ALL
            .into_iter()
            .map(|field| Self {
                key: field.key(),
                label: filter_label(field),
                value: applied.get(field.key()).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecimenListPage {
    pub specimens: Vec<SpecimenDetail>,
    pub pagination: PaginationMetadata,
    pub filters: Vec<FilterInput>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecimenDetailPage {
    pub specimen: SpecimenDetail,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmDeletePage {
    pub specimen: SpecimenDetail,
    pub action: String,
}

/// Field name and label shown on a form
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
}

impl FormField {
    fn list(fields: &[(&'static str, &'static str)]) -> Vec<Self> {
        fields
            .iter()
            .map(|&(name, label)| Self { name, label })
            .collect()
    }

    pub fn specimen() -> Vec<Self> {
        Self::list(&[
            ("catalog_number", "Catalog number"),
            ("expedition_id", "Expedition"),
            ("taxonomy_id", "Taxonomy"),
        ])
    }

    pub fn catalog_number() -> Vec<Self> {
        Self::list(&[("catalog_number", "Catalog number")])
    }

    pub fn expedition() -> Vec<Self> {
        Self::list(&[
            ("expedition", "Expedition"),
            ("continent", "Continent"),
            ("country", "Country"),
            ("state_province", "State/Province"),
            ("term", "Term"),
        ])
    }

    pub fn taxonomy() -> Vec<Self> {
        Self::list(&TAXONOMY_LABELS)
    }
}

/// An option of a select input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl From<&Expedition> for Choice {
    fn from(expedition: &Expedition) -> Self {
        let label = if expedition.expedition.is_empty() {
            format!("{} ({})", expedition.country, expedition.continent)
        } else {
            expedition.to_string()
        };
        Self {
            value: expedition.expedition_id.to_string(),
            label,
        }
    }
}

impl From<&Taxonomy> for Choice {
    fn from(taxonomy: &Taxonomy) -> Self {
        Self {
            value: taxonomy.taxonomy_id.to_string(),
            label: taxonomy.to_string(),
        }
    }
}

/// A form with its current values and errors
#[derive(Debug, Clone, Serialize)]
pub struct FormPage<T> {
    pub title: &'static str,
    pub action: String,
    pub fields: Vec<FormField>,
    pub values: T,
    pub errors: ValidationErrors,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub choices: BTreeMap<&'static str, Vec<Choice>>,
    pub notices: Vec<Notice>,
}

impl<T: Serialize> FormPage<T> {
    pub fn new(title: &'static str, action: impl Into<String>, fields: Vec<FormField>, values: T) -> Self {
        Self {
            title,
            action: action.into(),
            fields,
            values,
            errors: ValidationErrors::new(),
            choices: BTreeMap::new(),
            notices: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_choices(mut self, field: &'static str, choices: Vec<Choice>) -> Self {
        self.choices.insert(field, choices);
        self
    }

    pub fn with_notices(mut self, notices: Vec<Notice>) -> Self {
        self.notices = notices;
        self
    }

    /// `200 OK` for a fresh form, `422` once it carries errors
    pub fn render(self) -> Response {
        let status = if self.errors.is_empty() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        (status, Json(self)).into_response()
    }
}

/// Posted body of the specimen edit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogNumberForm {
    #[serde(default)]
    pub catalog_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_inputs_prefilled() {
        let mut applied = BTreeMap::new();
        applied.insert("expedition__continent", "Europe".to_string());

        let inputs = FilterInput::all(&applied);
        assert_eq!(inputs.len(), FilterField::ALL.len());

        let continent = inputs
            .iter()
            .find(|i| i.key == "expedition__continent")
            .unwrap();
        assert_eq!(continent.label, "Continent");
        assert_eq!(continent.value, "Europe");
        assert!(inputs.iter().filter(|i| i.value.is_empty()).count() == 8);
    }

    #[test]
    fn test_form_render_status() {
        let form = FormPage::new(
            "New taxonomy",
            "/new_taxonomy",
            FormField::taxonomy(),
            CatalogNumberForm::default(),
        );
        assert_eq!(form.clone().render().status(), StatusCode::OK);

        let errors = ValidationErrors::single(
            "catalog_number",
            crate::features::shared::FieldError::Required {
                label: "Catalog number",
            },
        );
        assert_eq!(
            form.with_errors(errors).render().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
