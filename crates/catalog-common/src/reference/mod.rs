//! Reference data for expedition validation
//!
//! Holds the fixed continent set and the country table that expedition
//! continent/country values are checked against. The data is loaded once into a
//! [`ReferenceData`] value and handed to validators, so tests and deployments
//! can substitute their own country table.

mod countries;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CatalogError, Result};

/// The accepted continent names, in their canonical title-cased form
pub const CONTINENTS: [&str; 7] = [
    "Africa",
    "Antarctica",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

/// Minimum input length before substring matching is attempted
const MIN_SUBSTRING_LEN: usize = 3;

/// Minimum Jaro-Winkler similarity for a typo-tolerant country match
const MIN_SIMILARITY: f64 = 0.9;

/// A country entry in the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code
    pub alpha3: String,
    /// Canonical short name, stored on expeditions
    pub name: String,
    /// Official and common alternate names
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Country {
    fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Continent set and country table
#[derive(Debug, Clone)]
pub struct ReferenceData {
    continents: Vec<String>,
    countries: Vec<Country>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// The built-in continent set and ISO 3166-1 country table
    pub fn builtin() -> Self {
        let countries = countries::ISO_COUNTRIES
            .iter()
            .map(|(alpha2, alpha3, name, aliases)| Country {
                alpha2: (*alpha2).to_string(),
                alpha3: (*alpha3).to_string(),
                name: (*name).to_string(),
                aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
            })
            .collect();

        Self {
            continents: CONTINENTS.iter().map(|c| (*c).to_string()).collect(),
            countries,
        }
    }

    /// Use a custom country table with the standard continent set
    pub fn with_countries(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(CatalogError::ReferenceData(
                "country table must not be empty".to_string(),
            ));
        }

        for country in &countries {
            if country.name.trim().is_empty() {
                return Err(CatalogError::ReferenceData(format!(
                    "country '{}' has an empty name",
                    country.alpha2
                )));
            }
            if country.alpha2.len() != 2 || country.alpha3.len() != 3 {
                return Err(CatalogError::ReferenceData(format!(
                    "country '{}' has malformed ISO codes ({}, {})",
                    country.name, country.alpha2, country.alpha3
                )));
            }
        }

        Ok(Self {
            continents: CONTINENTS.iter().map(|c| (*c).to_string()).collect(),
            countries,
        })
    }

    /// Load a country table from a JSON array of [`Country`] objects
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let countries: Vec<Country> = serde_json::from_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            count = countries.len(),
            "Loaded country reference table"
        );
        Self::with_countries(countries)
    }

    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Look up a continent by its title-cased form
    ///
    /// Returns the canonical name when the trimmed, title-cased input is in the
    /// continent set.
    pub fn continent(&self, input: &str) -> Option<&str> {
        let candidate = title_case(input.trim());
        self.continents
            .iter()
            .find(|c| **c == candidate)
            .map(String::as_str)
    }

    /// Resolve free text to a country
    ///
    /// Tries, in order: ISO alpha-2/alpha-3 codes, exact names (case
    /// insensitive), names containing the input, and finally the most
    /// similar name above a similarity threshold.
    pub fn resolve_country(&self, input: &str) -> Option<&Country> {
        let needle = normalize(input);
        if needle.is_empty() {
            return None;
        }

        if let Some(country) = self.countries.iter().find(|c| {
            c.alpha2.eq_ignore_ascii_case(&needle) || c.alpha3.eq_ignore_ascii_case(&needle)
        }) {
            return Some(country);
        }

        if let Some(country) = self
            .countries
            .iter()
            .find(|c| c.names().any(|name| normalize(name) == needle))
        {
            return Some(country);
        }

        if needle.chars().count() >= MIN_SUBSTRING_LEN {
            let best = self
                .countries
                .iter()
                .filter(|c| c.names().any(|name| normalize(name).contains(&needle)))
                .max_by(|a, b| {
                    similarity(&needle, a).total_cmp(&similarity(&needle, b))
                });
            if best.is_some() {
                return best;
            }
        }

        self.countries
            .iter()
            .map(|c| (c, similarity(&needle, c)))
            .filter(|(_, score)| *score >= MIN_SIMILARITY)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(c, _)| c)
    }
}

/// Title-case a string: the first letter of every alphabetic run is upper
/// case, the rest lower case
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn similarity(needle: &str, country: &Country) -> f64 {
    country
        .names()
        .map(|name| strsim::jaro_winkler(needle, &normalize(name)))
        .fold(0.0, f64::max)
}
