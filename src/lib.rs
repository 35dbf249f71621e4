pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{engine::RecommendationEngine, pipeline::CsvPipeline, recommend, resolve};
pub use crate::domain::model::{
    EmissionsSeries, Recommendation, RecommendationResult, SpeciesRate, SpeciesTable,
};
pub use crate::utils::error::{RecError, Result};
