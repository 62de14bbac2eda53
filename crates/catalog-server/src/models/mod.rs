//! Catalog records
//!
//! `Expedition` and `Taxonomy` are reference records that any number of
//! specimens may point at. `Specimen` holds the optional foreign keys, and
//! `SpecimenDetail` is the read shape with both references resolved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A collecting trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Expedition {
    pub expedition_id: i64,
    pub expedition: String,
    pub continent: String,
    pub country: String,
    pub state_province: Option<String>,
    pub term: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Display for Expedition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expedition)
    }
}

/// A biological classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Taxonomy {
    pub taxonomy_id: i64,
    pub kingdom: String,
    pub phylum: String,
    pub highest_biostratigraphic_zone: String,
    pub class_name: String,
    /// The taxonomic order
    pub identification_description: String,
    pub family: String,
    pub genus: String,
    pub species: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}/{}/{}/{}/{}/{}/{}/{})",
            self.kingdom,
            self.phylum,
            self.highest_biostratigraphic_zone,
            self.class_name,
            self.identification_description,
            self.family,
            self.genus,
            self.species
        )
    }
}

/// A cataloged specimen row with unresolved references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Specimen {
    pub specimen_id: i64,
    pub catalog_number: String,
    pub expedition_id: Option<i64>,
    pub taxonomy_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Display for Specimen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Specimen {}", self.specimen_id)
    }
}

/// A specimen with its expedition and taxonomy nested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecimenDetail {
    pub specimen_id: i64,
    pub catalog_number: String,
    pub expedition: Option<Expedition>,
    pub taxonomy: Option<Taxonomy>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SpecimenDetail {
    pub fn new(specimen: Specimen, expedition: Option<Expedition>, taxonomy: Option<Taxonomy>) -> Self {
        Self {
            specimen_id: specimen.specimen_id,
            catalog_number: specimen.catalog_number,
            expedition,
            taxonomy,
            created_at: specimen.created_at,
            updated_at: specimen.updated_at,
        }
    }
}

/// Validated expedition values ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpeditionFields {
    pub expedition: String,
    pub continent: String,
    pub country: String,
    pub state_province: Option<String>,
    pub term: Option<String>,
}

impl From<&Expedition> for ExpeditionFields {
    fn from(e: &Expedition) -> Self {
        Self {
            expedition: e.expedition.clone(),
            continent: e.continent.clone(),
            country: e.country.clone(),
            state_province: e.state_province.clone(),
            term: e.term.clone(),
        }
    }
}

/// Validated taxonomy values ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomyFields {
    pub kingdom: String,
    pub phylum: String,
    pub highest_biostratigraphic_zone: String,
    pub class_name: String,
    pub identification_description: String,
    pub family: String,
    pub genus: String,
    pub species: String,
}

impl From<&Taxonomy> for TaxonomyFields {
    fn from(t: &Taxonomy) -> Self {
        Self {
            kingdom: t.kingdom.clone(),
            phylum: t.phylum.clone(),
            highest_biostratigraphic_zone: t.highest_biostratigraphic_zone.clone(),
            class_name: t.class_name.clone(),
            identification_description: t.identification_description.clone(),
            family: t.family.clone(),
            genus: t.genus.clone(),
            species: t.species.clone(),
        }
    }
}

/// Validated specimen values ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecimenFields {
    pub catalog_number: String,
    pub expedition_id: Option<i64>,
    pub taxonomy_id: Option<i64>,
}

impl From<&SpecimenDetail> for SpecimenFields {
    fn from(s: &SpecimenDetail) -> Self {
        Self {
            catalog_number: s.catalog_number.clone(),
            expedition_id: s.expedition.as_ref().map(|e| e.expedition_id),
            taxonomy_id: s.taxonomy.as_ref().map(|t| t.taxonomy_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        let now = Utc::now();
        Taxonomy {
            taxonomy_id: 4,
            kingdom: "Animalia".to_string(),
            phylum: "Chordata".to_string(),
            highest_biostratigraphic_zone: "Vertebrata".to_string(),
            class_name: "Mammalia".to_string(),
            identification_description: "Carnivora".to_string(),
            family: "Felidae".to_string(),
            genus: "Panthera".to_string(),
            species: "leo".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_taxonomy_display() {
        assert_eq!(
            taxonomy().to_string(),
            "(Animalia/Chordata/Vertebrata/Mammalia/Carnivora/Felidae/Panthera/leo)"
        );
    }

    #[test]
    fn test_specimen_display() {
        let now = Utc::now();
        let specimen = Specimen {
            specimen_id: 42,
            catalog_number: "1234.56.78.9012".to_string(),
            expedition_id: None,
            taxonomy_id: None,
            created_at: now,
            updated_at: now,
        };
        assert_eq!(specimen.to_string(), "Specimen 42");
    }

    #[test]
    fn test_detail_fields_round_trip_references() {
        let now = Utc::now();
        let specimen = Specimen {
            specimen_id: 1,
            catalog_number: "1.1.1.1".to_string(),
            expedition_id: None,
            taxonomy_id: Some(4),
            created_at: now,
            updated_at: now,
        };
        let detail = SpecimenDetail::new(specimen, None, Some(taxonomy()));
        let fields = SpecimenFields::from(&detail);
        assert_eq!(fields.taxonomy_id, Some(4));
        assert_eq!(fields.expedition_id, None);
    }
}
