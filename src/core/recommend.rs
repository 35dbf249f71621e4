use crate::domain::model::{Recommendation, SpeciesTable};
use crate::utils::error::{RecError, Result};

/// Computes, for every species in the table, how many trees would absorb
/// `total_emissions` kilograms of CO2 in a year.
///
/// Counts truncate rather than round: a species contributes a whole tree only
/// once its full per-tree capacity is covered, so the estimate never
/// over-promises offset capacity. Output order is the table's insertion
/// order.
///
/// Validation is atomic: a non-finite or negative total, an empty table, or
/// any non-positive absorption rate fails the whole call with no partial
/// results.
pub fn compute_recommendations(
    total_emissions: f64,
    table: &SpeciesTable,
) -> Result<Vec<Recommendation>> {
    if !total_emissions.is_finite() || total_emissions < 0.0 {
        return Err(RecError::InvalidInput {
            field: "total_emissions".to_string(),
            value: total_emissions.to_string(),
            reason: "must be a finite non-negative number".to_string(),
        });
    }

    if table.is_empty() {
        return Err(RecError::InvalidInput {
            field: "species_table".to_string(),
            value: "<empty>".to_string(),
            reason: "reference table must contain at least one species".to_string(),
        });
    }

    for entry in table.entries() {
        if !entry.co2_kg_per_year.is_finite() || entry.co2_kg_per_year <= 0.0 {
            return Err(RecError::InvalidInput {
                field: format!("absorption rate for '{}'", entry.species),
                value: entry.co2_kg_per_year.to_string(),
                reason: "must be strictly positive".to_string(),
            });
        }
    }

    Ok(table
        .entries()
        .iter()
        .map(|entry| Recommendation {
            species: entry.species.clone(),
            tree_count: (total_emissions / entry.co2_kg_per_year).floor() as u64,
        })
        .collect())
}
