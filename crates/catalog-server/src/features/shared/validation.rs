//! Field validation for catalog records
//!
//! Each validator trims its input and returns the normalized value to store,
//! or a [`FieldError`]. The record-level validators run every field check and
//! collect all failures into [`ValidationErrors`] keyed by field name, so a
//! form can show every problem at once.
//!
//! # Examples
//!
//! ```rust,ignore
//! use catalog_server::features::shared::validation::validate_catalog_number;
//!
//! assert_eq!(validate_catalog_number(" 1234.56.78.9012 ")?, "1234.56.78.9012");
//! assert!(validate_catalog_number("12345.56.78.9012").is_err());
//! ```

use std::collections::BTreeMap;

use catalog_common::reference::ReferenceData;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::models::{ExpeditionFields, TaxonomyFields};

/// Maximum digits in each dot-separated catalog number part
pub const CATALOG_NUMBER_PART_LENGTHS: [usize; 4] = [4, 2, 2, 4];

/// Minimum length of every taxonomy field
pub const TAXONOMY_MIN_LENGTH: usize = 3;

/// Word a non-blank expedition name must contain
const EXPEDITION_KEYWORD: &str = "expedition";

/// A single field failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{message}")]
    Format { message: String },

    #[error("'{value}' is not a valid {label}")]
    InvalidChoice { label: &'static str, value: String },

    #[error("{label} must be at least {min} characters long")]
    TooShort { label: &'static str, min: usize },

    #[error("{label} is required")]
    Required { label: &'static str },

    #[error("{label} '{value}' is already in use")]
    Taken { label: &'static str, value: String },
}

impl FieldError {
    fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}

/// Failures for a whole record, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.errors.entry(field).or_default().push(error);
    }

    /// Record the error if `result` failed, returning the value otherwise
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, error);
                None
            },
        }
    }

    pub fn single(field: &'static str, error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.add(field, error);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[FieldError]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    /// Field name to rendered messages
    pub fn messages(&self) -> BTreeMap<&'static str, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, errors)| (*field, errors.iter().map(ToString::to_string).collect()))
            .collect()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

/// Validate a catalog number of the form `NNNN.NN.NN.NNNN`
///
/// Exactly four dot-separated parts of ASCII digits, each within the
/// length bound of [`CATALOG_NUMBER_PART_LENGTHS`]. Leading zeros are fine.
pub fn validate_catalog_number(input: &str) -> Result<String, FieldError> {
    let value = input.trim();
    let parts: Vec<&str> = value.split('.').collect();

    let well_formed = parts.len() == CATALOG_NUMBER_PART_LENGTHS.len()
        && parts
            .iter()
            .zip(CATALOG_NUMBER_PART_LENGTHS)
            .all(|(part, max)| {
                !part.is_empty() && part.len() <= max && part.bytes().all(|b| b.is_ascii_digit())
            });

    if !well_formed {
        return Err(FieldError::format(
            "Catalog number must be four dot-separated numbers of at most 4, 2, 2 and 4 digits \
             (e.g. 1234.56.78.9012)",
        ));
    }

    Ok(value.to_string())
}

/// A blank expedition name is allowed; otherwise it must mention "expedition"
pub fn validate_expedition_name(input: &str) -> Result<String, FieldError> {
    let value = input.trim();
    if !value.is_empty() && !value.to_lowercase().contains(EXPEDITION_KEYWORD) {
        return Err(FieldError::format(
            "Expedition name must contain the word 'expedition'",
        ));
    }
    Ok(value.to_string())
}

pub fn validate_continent(reference: &ReferenceData, input: &str) -> Result<String, FieldError> {
    reference
        .continent(input)
        .map(str::to_string)
        .ok_or_else(|| FieldError::InvalidChoice {
            label: "continent",
            value: input.trim().to_string(),
        })
}

/// Resolve free text to the canonical country name
pub fn validate_country(reference: &ReferenceData, input: &str) -> Result<String, FieldError> {
    reference
        .resolve_country(input)
        .map(|country| country.name.clone())
        .ok_or_else(|| FieldError::InvalidChoice {
            label: "country",
            value: input.trim().to_string(),
        })
}

pub fn validate_min_length(label: &'static str, input: &str, min: usize) -> Result<String, FieldError> {
    let value = input.trim();
    if value.chars().count() < min {
        return Err(FieldError::TooShort { label, min });
    }
    Ok(value.to_string())
}

fn optional_text(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Submitted expedition values, from a JSON body or a form post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpeditionInput {
    #[serde(default)]
    pub expedition: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
}

impl From<&ExpeditionFields> for ExpeditionInput {
    fn from(fields: &ExpeditionFields) -> Self {
        Self {
            expedition: fields.expedition.clone(),
            continent: fields.continent.clone(),
            country: fields.country.clone(),
            state_province: fields.state_province.clone(),
            term: fields.term.clone(),
        }
    }
}

/// Validate and normalize every expedition field
pub fn validate_expedition(
    reference: &ReferenceData,
    input: &ExpeditionInput,
) -> Result<ExpeditionFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let expedition = errors.check("expedition", validate_expedition_name(&input.expedition));
    let continent = errors.check("continent", validate_continent(reference, &input.continent));
    let country = errors.check("country", validate_country(reference, &input.country));

    match (expedition, continent, country) {
        (Some(expedition), Some(continent), Some(country)) if errors.is_empty() => {
            Ok(ExpeditionFields {
                expedition,
                continent,
                country,
                state_province: optional_text(input.state_province.as_deref()),
                term: optional_text(input.term.as_deref()),
            })
        },
        _ => Err(errors),
    }
}

/// Submitted taxonomy values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyInput {
    #[serde(default)]
    pub kingdom: String,
    #[serde(default)]
    pub phylum: String,
    #[serde(default)]
    pub highest_biostratigraphic_zone: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub identification_description: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub genus: String,
    #[serde(default)]
    pub species: String,
}

impl From<&TaxonomyFields> for TaxonomyInput {
    fn from(fields: &TaxonomyFields) -> Self {
        Self {
            kingdom: fields.kingdom.clone(),
            phylum: fields.phylum.clone(),
            highest_biostratigraphic_zone: fields.highest_biostratigraphic_zone.clone(),
            class_name: fields.class_name.clone(),
            identification_description: fields.identification_description.clone(),
            family: fields.family.clone(),
            genus: fields.genus.clone(),
            species: fields.species.clone(),
        }
    }
}

/// Field name and display label of each taxonomy field, in rank order
pub const TAXONOMY_LABELS: [(&str, &str); 8] = [
    ("kingdom", "Kingdom"),
    ("phylum", "Phylum"),
    ("highest_biostratigraphic_zone", "Sub-Phylum"),
    ("class_name", "Class"),
    ("identification_description", "Order"),
    ("family", "Family"),
    ("genus", "Genus"),
    ("species", "Species"),
];

/// Validate every taxonomy field against the minimum length
pub fn validate_taxonomy(input: &TaxonomyInput) -> Result<TaxonomyFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let values = [
        &input.kingdom,
        &input.phylum,
        &input.highest_biostratigraphic_zone,
        &input.class_name,
        &input.identification_description,
        &input.family,
        &input.genus,
        &input.species,
    ];

    let mut checked: Vec<String> = Vec::with_capacity(values.len());
    for ((field, label), value) in TAXONOMY_LABELS.into_iter().zip(values) {
        if let Some(value) = errors.check(field, validate_min_length(label, value, TAXONOMY_MIN_LENGTH)) {
            checked.push(value);
        }
    }

    errors.into_result()?;

    let mut checked = checked.into_iter();
    let mut next = || checked.next().unwrap_or_default();
    Ok(TaxonomyFields {
        kingdom: next(),
        phylum: next(),
        highest_biostratigraphic_zone: next(),
        class_name: next(),
        identification_description: next(),
        family: next(),
        genus: next(),
        species: next(),
    })
}

/// A submitted record reference, kept as entered until validation
///
/// Deserializes from a JSON number, a numeric string or a blank form value.
/// Text that is not a number is kept so validation can report it against
/// the field instead of failing the whole body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IdInput {
    #[default]
    Blank,
    Id(i64),
    Invalid(String),
}

impl IdInput {
    /// The referenced id, `None` when blank
    pub fn resolve(&self, label: &'static str) -> Result<Option<i64>, FieldError> {
        match self {
            Self::Blank => Ok(None),
            Self::Id(id) => Ok(Some(*id)),
            Self::Invalid(value) => Err(FieldError::InvalidChoice {
                label,
                value: value.clone(),
            }),
        }
    }
}

impl From<Option<i64>> for IdInput {
    fn from(id: Option<i64>) -> Self {
        id.map_or(Self::Blank, Self::Id)
    }
}

impl Serialize for IdInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Blank => serializer.serialize_none(),
            Self::Id(id) => serializer.serialize_i64(*id),
            Self::Invalid(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for IdInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdRepr {
            Number(i64),
            Text(String),
        }

        Ok(match Option::<IdRepr>::deserialize(deserializer)? {
            None => Self::Blank,
            Some(IdRepr::Number(id)) => Self::Id(id),
            Some(IdRepr::Text(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    Self::Blank
                } else {
                    text.parse()
                        .map_or_else(|_| Self::Invalid(text.to_string()), Self::Id)
                }
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_number_valid() {
        assert_eq!(validate_catalog_number("1234.56.78.9012").unwrap(), "1234.56.78.9012");
        assert_eq!(validate_catalog_number("  1.2.3.4 ").unwrap(), "1.2.3.4");
        assert!(validate_catalog_number("0001.00.01.0000").is_ok());
    }

    #[test]
    fn test_catalog_number_part_lengths() {
        assert!(validate_catalog_number("12345.56.78.9012").is_err());
        assert!(validate_catalog_number("1234.567.78.9012").is_err());
        assert!(validate_catalog_number("1234.56.789.9012").is_err());
        assert!(validate_catalog_number("1234.56.78.90123").is_err());
    }

    #[test]
    fn test_catalog_number_shape() {
        assert!(validate_catalog_number("1234.56.78").is_err());
        assert!(validate_catalog_number("1234.56.78.9012.1").is_err());
        assert!(validate_catalog_number("").is_err());
        assert!(validate_catalog_number("1234..78.9012").is_err());
    }

    #[test]
    fn test_catalog_number_rejects_non_digits() {
        assert!(validate_catalog_number("-123.56.78.9012").is_err());
        assert!(validate_catalog_number("+123.56.78.9012").is_err());
        assert!(validate_catalog_number("12a4.56.78.9012").is_err());
        assert!(validate_catalog_number("1 34.56.78.9012").is_err());
    }

    #[test]
    fn test_expedition_name() {
        assert_eq!(validate_expedition_name("").unwrap(), "");
        assert_eq!(validate_expedition_name(" Rift EXPEDITION ").unwrap(), "Rift EXPEDITION");
        assert!(matches!(
            validate_expedition_name("Field trip"),
            Err(FieldError::Format { .. })
        ));
    }

    #[test]
    fn test_continent() {
        let reference = ReferenceData::builtin();
        assert_eq!(validate_continent(&reference, "europe").unwrap(), "Europe");
        assert_eq!(
            validate_continent(&reference, "Mars"),
            Err(FieldError::InvalidChoice {
                label: "continent",
                value: "Mars".to_string()
            })
        );
        assert!(validate_continent(&reference, "").is_err());
    }

    #[test]
    fn test_country_normalizes() {
        let reference = ReferenceData::builtin();
        assert_eq!(validate_country(&reference, "de").unwrap(), "Germany");
        assert_eq!(validate_country(&reference, "germny").unwrap(), "Germany");
        assert!(validate_country(&reference, "").is_err());
        assert!(validate_country(&reference, "Country1").is_err());
    }

    #[test]
    fn test_min_length() {
        assert!(matches!(
            validate_min_length("Class", "Ma", 3),
            Err(FieldError::TooShort { label: "Class", min: 3 })
        ));
        assert_eq!(validate_min_length("Class", " Mammalia ", 3).unwrap(), "Mammalia");
        assert!(validate_min_length("Class", "  Ma  ", 3).is_err());
    }

    #[test]
    fn test_validate_expedition_collects_all_errors() {
        let reference = ReferenceData::builtin();
        let input = ExpeditionInput {
            expedition: "Field trip".to_string(),
            continent: "Mars".to_string(),
            country: "Atlantis".to_string(),
            ..ExpeditionInput::default()
        };

        let errors = validate_expedition(&reference, &input).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["continent", "country", "expedition"]);
    }

    #[test]
    fn test_validate_expedition_normalizes() {
        let reference = ReferenceData::builtin();
        let input = ExpeditionInput {
            expedition: "  Alps Expedition ".to_string(),
            continent: "europe".to_string(),
            country: "switzerland".to_string(),
            state_province: Some("   ".to_string()),
            term: Some(" Summer ".to_string()),
        };

        let fields = validate_expedition(&reference, &input).unwrap();
        assert_eq!(fields.expedition, "Alps Expedition");
        assert_eq!(fields.continent, "Europe");
        assert_eq!(fields.country, "Switzerland");
        assert_eq!(fields.state_province, None);
        assert_eq!(fields.term.as_deref(), Some("Summer"));
    }

    #[test]
    fn test_validate_taxonomy() {
        let mut input = TaxonomyInput {
            kingdom: "Animalia".to_string(),
            phylum: "Chordata".to_string(),
            highest_biostratigraphic_zone: "Vertebrata".to_string(),
            class_name: "Mammalia".to_string(),
            identification_description: "Carnivora".to_string(),
            family: "Felidae".to_string(),
            genus: "Panthera".to_string(),
            species: "leo".to_string(),
        };
        let fields = validate_taxonomy(&input).unwrap();
        assert_eq!(fields.identification_description, "Carnivora");
        assert_eq!(fields.species, "leo");

        input.class_name = "Ma".to_string();
        input.genus = String::new();
        let errors = validate_taxonomy(&input).unwrap_err();
        assert_eq!(errors.fields().count(), 2);
        assert_eq!(
            errors.messages()["class_name"],
            vec!["Class must be at least 3 characters long".to_string()]
        );
    }

    #[test]
    fn test_validation_errors_serialize_as_messages() {
        let errors = ValidationErrors::single("continent", FieldError::Required { label: "Continent" });
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "continent": ["Continent is required"] }));
    }

    #[derive(Debug, Deserialize)]
    struct IdHolder {
        #[serde(default)]
        id: IdInput,
    }

    fn id_of(json: &str) -> IdInput {
        serde_json::from_str::<IdHolder>(json).unwrap().id
    }

    #[test]
    fn test_id_input_deserializes() {
        assert_eq!(id_of(r#"{"id": 7}"#), IdInput::Id(7));
        assert_eq!(id_of(r#"{"id": " 8 "}"#), IdInput::Id(8));
        assert_eq!(id_of(r#"{"id": ""}"#), IdInput::Blank);
        assert_eq!(id_of(r#"{"id": null}"#), IdInput::Blank);
        assert_eq!(id_of("{}"), IdInput::Blank);
        assert_eq!(id_of(r#"{"id": "abc"}"#), IdInput::Invalid("abc".to_string()));
        assert_eq!(
            id_of(r#"{"id": "99999999999999999999"}"#),
            IdInput::Invalid("99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_id_input_resolve() {
        assert_eq!(IdInput::Id(3).resolve("expedition"), Ok(Some(3)));
        assert_eq!(IdInput::Blank.resolve("expedition"), Ok(None));
        assert_eq!(
            IdInput::Invalid("abc".to_string()).resolve("expedition"),
            Err(FieldError::InvalidChoice {
                label: "expedition",
                value: "abc".to_string()
            })
        );
        assert_eq!(
            serde_json::to_value(IdInput::Invalid("abc".to_string())).unwrap(),
            serde_json::json!("abc")
        );
    }
}
