//! Specimen filter parameters
//!
//! Turns raw query parameters into a [`SpecimenFilter`]. Unknown keys and
//! blank values are ignored. A value that cannot be a legitimate search term
//! fails the whole filter, and callers show an empty listing with a notice.

use thiserror::Error;

use crate::store::{FilterField, SpecimenFilter};

/// Longest accepted filter value, in characters
pub const MAX_FILTER_VALUE_LENGTH: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("{key} must be at most {max} characters")]
    TooLong { key: &'static str, max: usize },

    #[error("{key} contains control characters")]
    ControlCharacters { key: &'static str },
}

/// Build a specimen filter from `(key, value)` query pairs
pub fn parse_specimen_filter<'a, I>(params: I) -> Result<SpecimenFilter, FilterError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filter = SpecimenFilter::new();

    for (key, value) in params {
        let Some(field) = FilterField::from_key(key) else {
            continue;
        };

        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if value.chars().any(char::is_control) {
            return Err(FilterError::ControlCharacters { key: field.key() });
        }
        if value.chars().count() > MAX_FILTER_VALUE_LENGTH {
            return Err(FilterError::TooLong {
                key: field.key(),
                max: MAX_FILTER_VALUE_LENGTH,
            });
        }

        filter = filter.with(field, value);
    }

    Ok(filter)
}

/// Display label of a filter field on the listing form
pub fn filter_label(field: FilterField) -> &'static str {
    match field {
        FilterField::TaxonomyKingdom => "Kingdom",
        FilterField::TaxonomyPhylum => "Phylum",
        FilterField::TaxonomyHighestBiostratigraphicZone => "Sub-Phylum",
        FilterField::TaxonomyClassName => "Class",
        FilterField::TaxonomyFamily => "Family",
        FilterField::TaxonomyGenus => "Genus",
        FilterField::TaxonomySpecies => "Species",
        FilterField::ExpeditionContinent => "Continent",
        FilterField::ExpeditionCountry => "Country",
    }
}
