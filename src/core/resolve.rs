use crate::domain::model::{EmissionsSeries, SUPPORTED_YEARS};
use crate::utils::error::{RecError, Result};

/// Folds the accented characters that appear in Nordic municipality names to
/// their ASCII-safe forms. Applied to both stored names and user input so
/// matching is consistent in either direction.
pub fn fold_special_chars(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'å' | 'ä' => 'a',
            'Å' | 'Ä' => 'A',
            'ö' => 'o',
            'Ö' => 'O',
            'é' | 'è' => 'e',
            'É' | 'È' => 'E',
            'ü' => 'u',
            'Ü' => 'U',
            other => other,
        })
        .collect()
}

/// Finds the first city whose folded name contains the folded query,
/// case-insensitively.
pub fn match_city<'a>(query: &str, series: &'a [EmissionsSeries]) -> Result<&'a EmissionsSeries> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(RecError::InvalidInput {
            field: "city".to_string(),
            value: query.to_string(),
            reason: "city query cannot be empty".to_string(),
        });
    }

    let needle = fold_special_chars(trimmed).to_lowercase();

    series
        .iter()
        .find(|s| fold_special_chars(&s.city).to_lowercase().contains(&needle))
        .ok_or_else(|| RecError::CityNotFound {
            query: trimmed.to_string(),
        })
}

/// Looks up the predicted emissions for `year` in a city's series. The year
/// must be inside the prediction window and present in the series, otherwise
/// the calculator must not be invoked.
pub fn resolve_year(series: &EmissionsSeries, year: i32) -> Result<f64> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(RecError::YearNotFound {
            year,
            available: join_years(&SUPPORTED_YEARS),
        });
    }

    series
        .values
        .get(&year)
        .copied()
        .ok_or_else(|| RecError::YearNotFound {
            year,
            available: join_years(&series.years()),
        })
}

fn join_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
