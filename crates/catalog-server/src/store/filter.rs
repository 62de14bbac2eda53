//! Specimen listing filter
//!
//! A filter is a list of (field, needle) conditions that must all hold. Each
//! condition is a case-insensitive substring match against a column of the
//! specimen's taxonomy or expedition. Specimens without the referenced record
//! never match a condition on it.

use serde::Serialize;

use crate::models::SpecimenDetail;

/// A filterable column reached through a specimen's references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FilterField {
    TaxonomyKingdom,
    TaxonomyPhylum,
    TaxonomyHighestBiostratigraphicZone,
    TaxonomyClassName,
    TaxonomyFamily,
    TaxonomyGenus,
    TaxonomySpecies,
    ExpeditionContinent,
    ExpeditionCountry,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::TaxonomyKingdom,
        FilterField::TaxonomyPhylum,
        FilterField::TaxonomyHighestBiostratigraphicZone,
        FilterField::TaxonomyClassName,
        FilterField::TaxonomyFamily,
        FilterField::TaxonomyGenus,
        FilterField::TaxonomySpecies,
        FilterField::ExpeditionContinent,
        FilterField::ExpeditionCountry,
    ];

    /// Query parameter name
    pub fn key(self) -> &'static str {
        match self {
            FilterField::TaxonomyKingdom => "taxonomy__kingdom",
            FilterField::TaxonomyPhylum => "taxonomy__phylum",
            FilterField::TaxonomyHighestBiostratigraphicZone => {
                "taxonomy__highest_biostratigraphic_zone"
            },
            FilterField::TaxonomyClassName => "taxonomy__class_name",
            FilterField::TaxonomyFamily => "taxonomy__family",
            FilterField::TaxonomyGenus => "taxonomy__genus",
            FilterField::TaxonomySpecies => "taxonomy__species",
            FilterField::ExpeditionContinent => "expedition__continent",
            FilterField::ExpeditionCountry => "expedition__country",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Qualified SQL column, relative to the `t`/`e` join aliases
    pub(crate) fn column(self) -> &'static str {
        match self {
            FilterField::TaxonomyKingdom => "t.kingdom",
            FilterField::TaxonomyPhylum => "t.phylum",
            FilterField::TaxonomyHighestBiostratigraphicZone => "t.highest_biostratigraphic_zone",
            FilterField::TaxonomyClassName => "t.class_name",
            FilterField::TaxonomyFamily => "t.family",
            FilterField::TaxonomyGenus => "t.genus",
            FilterField::TaxonomySpecies => "t.species",
            FilterField::ExpeditionContinent => "e.continent",
            FilterField::ExpeditionCountry => "e.country",
        }
    }

    fn value_of(self, specimen: &SpecimenDetail) -> Option<&str> {
        let taxonomy = specimen.taxonomy.as_ref();
        let expedition = specimen.expedition.as_ref();
        match self {
            FilterField::TaxonomyKingdom => taxonomy.map(|t| t.kingdom.as_str()),
            FilterField::TaxonomyPhylum => taxonomy.map(|t| t.phylum.as_str()),
            FilterField::TaxonomyHighestBiostratigraphicZone => {
                taxonomy.map(|t| t.highest_biostratigraphic_zone.as_str())
            },
            FilterField::TaxonomyClassName => taxonomy.map(|t| t.class_name.as_str()),
            FilterField::TaxonomyFamily => taxonomy.map(|t| t.family.as_str()),
            FilterField::TaxonomyGenus => taxonomy.map(|t| t.genus.as_str()),
            FilterField::TaxonomySpecies => taxonomy.map(|t| t.species.as_str()),
            FilterField::ExpeditionContinent => expedition.map(|e| e.continent.as_str()),
            FilterField::ExpeditionCountry => expedition.map(|e| e.country.as_str()),
        }
    }
}

/// Conjunction of substring conditions over specimen references
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecimenFilter {
    conditions: Vec<(FilterField, String)>,
}

impl SpecimenFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition; a later value for the same field replaces the earlier one
    pub fn with(mut self, field: FilterField, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        match self.conditions.iter_mut().find(|(f, _)| *f == field) {
            Some(existing) => existing.1 = needle,
            None => self.conditions.push((field, needle)),
        }
        self
    }

    pub fn conditions(&self) -> &[(FilterField, String)] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the filter against a resolved specimen
    pub fn matches(&self, specimen: &SpecimenDetail) -> bool {
        self.conditions.iter().all(|(field, needle)| {
            field
                .value_of(specimen)
                .map(|value| value.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false)
        })
    }
}

/// `ILIKE` pattern matching `needle` literally anywhere in the value
pub(crate) fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
