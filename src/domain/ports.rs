use crate::domain::model::{RecommendationResult, SourceData};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Writes `data` and returns the resolved path of the written file, so
    /// callers report the location the backend actually used.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn species_file(&self) -> &str;
    fn emissions_file(&self) -> &str;
    fn city_query(&self) -> &str;
    fn target_year(&self) -> i32;
    /// Optional subset of species to recommend for; empty means the whole
    /// reference table.
    fn species_filter(&self) -> &[String];
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceData>;
    async fn transform(&self, data: SourceData) -> Result<RecommendationResult>;
    async fn load(&self, result: RecommendationResult) -> Result<String>;
}
