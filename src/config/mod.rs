pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    self, validate_file_extensions, validate_non_empty_string, validate_path,
    validate_supported_year,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tree-offset")]
#[command(about = "Tree-planting recommendations sized to offset a city's predicted CO2 emissions")]
pub struct CliConfig {
    #[arg(long, default_value = "./data/trees.csv")]
    pub species_file: String,

    #[arg(long, default_value = "./data/predicted_emissions.csv")]
    pub emissions_file: String,

    #[arg(long, help = "City name; matched case-insensitively, accents optional")]
    pub city: String,

    #[arg(long, default_value = "2022")]
    pub year: i32,

    #[arg(
        long,
        value_delimiter = ',',
        help = "Restrict recommendations to these species"
    )]
    pub species: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU/memory stats during the run")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn species_file(&self) -> &str {
        &self.species_file
    }

    fn emissions_file(&self) -> &str {
        &self.emissions_file
    }

    fn city_query(&self) -> &str {
        &self.city
    }

    fn target_year(&self) -> i32 {
        self.year
    }

    fn species_filter(&self) -> &[String] {
        &self.species
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_path("species_file", &self.species_file)?;
        validate_path("emissions_file", &self.emissions_file)?;
        validate_path("output_path", &self.output_path)?;
        validate_file_extensions(
            "input_files",
            &[self.species_file.clone(), self.emissions_file.clone()],
            &["csv"],
        )?;
        validate_non_empty_string("city", &self.city)?;
        validate_supported_year("year", self.year)?;
        Ok(())
    }
}
