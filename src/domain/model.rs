use crate::utils::error::{RecError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prediction window of the upstream forecasting model. Requests outside this
/// set always fail with YearNotFound, even if a series happens to carry data.
pub const SUPPORTED_YEARS: [i32; 4] = [2022, 2023, 2024, 2025];

/// Average yearly CO2 uptake of one tree of a species, in kilograms.
///
/// Column names follow the reference table shipped with the source data
/// (`Tree`, `Average CO2 Consumption`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesRate {
    #[serde(rename = "Tree")]
    pub species: String,
    #[serde(rename = "Average CO2 Consumption")]
    pub co2_kg_per_year: f64,
}

/// Insertion-ordered species reference table. Read-only after load.
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    entries: Vec<SpeciesRate>,
}

impl SpeciesTable {
    pub fn new(entries: Vec<SpeciesRate>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SpeciesRate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a single species by name. Used when a caller filters the
    /// table down to named species rather than iterating all of it.
    pub fn rate_for(&self, species: &str) -> Result<&SpeciesRate> {
        self.entries
            .iter()
            .find(|entry| entry.species == species)
            .ok_or_else(|| RecError::LookupFailure {
                species: species.to_string(),
            })
    }

    /// Restricts the table to the named species, in the order they were
    /// asked for. Any name absent from the table fails the whole call.
    pub fn filtered(&self, names: &[String]) -> Result<SpeciesTable> {
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            entries.push(self.rate_for(name)?.clone());
        }
        Ok(SpeciesTable::new(entries))
    }
}


/// Predicted total emissions for one city, keyed by year. The BTreeMap keeps
/// the series ordered by year regardless of input row order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionsSeries {
    pub city: String,
    pub values: BTreeMap<i32, f64>,
}

impl EmissionsSeries {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn years(&self) -> Vec<i32> {
        self.values.keys().copied().collect()
    }
}

/// One row of a predicted-emissions CSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionsRow {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Predicted Emissions")]
    pub emissions: f64,
}

/// Tree count recommended for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub species: String,
    pub tree_count: u64,
}

/// Per-species counts for exactly one (city, year) pair. Created fresh per
/// request and discarded after the load step; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub city: String,
    pub year: i32,
    pub total_emissions: f64,
    pub recommendations: Vec<Recommendation>,
}

/// Everything the extract step hands to transform.
#[derive(Debug, Clone)]
pub struct SourceData {
    pub species: SpeciesTable,
    pub series: Vec<EmissionsSeries>,
}
