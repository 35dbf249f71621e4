use crate::core::resolve::{match_city, resolve_year};
use crate::core::{recommend, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    EmissionsRow, EmissionsSeries, RecommendationResult, SourceData, SpeciesRate, SpeciesTable,
};
use crate::utils::error::Result;

/// Runs the recommendation flow against CSV reference data: extract reads
/// the species and predicted-emissions tables through the storage port,
/// transform resolves the requested city and year and computes the counts,
/// load writes the result as CSV and JSON.
pub struct CsvPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CsvPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_species(data: &[u8]) -> Result<SpeciesTable> {
        let mut reader = csv::Reader::from_reader(data);
        let mut entries = Vec::new();

        for row in reader.deserialize::<SpeciesRate>() {
            entries.push(row?);
        }

        Ok(SpeciesTable::new(entries))
    }

    fn parse_emissions(data: &[u8]) -> Result<Vec<EmissionsSeries>> {
        let mut reader = csv::Reader::from_reader(data);
        // Series keep the file's first-seen city order; small data, linear
        // scan is fine.
        let mut series: Vec<EmissionsSeries> = Vec::new();

        for row in reader.deserialize::<EmissionsRow>() {
            let row = row?;
            match series.iter_mut().find(|s| s.city == row.city) {
                Some(existing) => {
                    existing.values.insert(row.year, row.emissions);
                }
                None => {
                    let mut fresh = EmissionsSeries::new(row.city);
                    fresh.values.insert(row.year, row.emissions);
                    series.push(fresh);
                }
            }
        }

        Ok(series)
    }

    fn to_csv(result: &RecommendationResult) -> String {
        let mut lines = vec!["Tree,Recommended Tree Amount".to_string()];
        for rec in &result.recommendations {
            lines.push(format!("{},{}", rec.species, rec.tree_count));
        }
        lines.join("\n") + "\n"
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CsvPipeline<S, C> {
    async fn extract(&self) -> Result<SourceData> {
        tracing::debug!("Reading species table from: {}", self.config.species_file());
        let species_bytes = self.storage.read_file(self.config.species_file()).await?;
        let species = Self::parse_species(&species_bytes)?;

        tracing::debug!(
            "Reading predicted emissions from: {}",
            self.config.emissions_file()
        );
        let emissions_bytes = self.storage.read_file(self.config.emissions_file()).await?;
        let series = Self::parse_emissions(&emissions_bytes)?;

        tracing::debug!(
            "Extracted {} species entries and {} city series",
            species.len(),
            series.len()
        );

        Ok(SourceData { species, series })
    }

    async fn transform(&self, data: SourceData) -> Result<RecommendationResult> {
        let matched = match_city(self.config.city_query(), &data.series)?;
        let year = self.config.target_year();
        let total_emissions = resolve_year(matched, year)?;

        let filter = self.config.species_filter();
        let table = if filter.is_empty() {
            data.species.clone()
        } else {
            data.species.filtered(filter)?
        };

        tracing::debug!(
            "Resolved '{}' to {} with {} kg predicted for {}",
            self.config.city_query(),
            matched.city,
            total_emissions,
            year
        );

        let recommendations = recommend::compute_recommendations(total_emissions, &table)?;

        Ok(RecommendationResult {
            city: matched.city.clone(),
            year,
            total_emissions,
            recommendations,
        })
    }

    async fn load(&self, result: RecommendationResult) -> Result<String> {
        let csv_output = Self::to_csv(&result);
        let csv_path = self
            .storage
            .write_file("recommendations.csv", csv_output.as_bytes())
            .await?;

        let json_bytes = serde_json::to_vec_pretty(&result)?;
        self.storage
            .write_file("recommendations.json", &json_bytes)
            .await?;

        Ok(csv_path)
    }
}
