pub mod engine;
pub mod pipeline;
pub mod recommend;
pub mod resolve;

pub use crate::domain::model::{
    EmissionsSeries, Recommendation, RecommendationResult, SourceData, SpeciesRate, SpeciesTable,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
