use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::{RunMonitor, RunPhase};

pub struct RecommendationEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> RecommendationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitoring: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitoring),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting recommendation run...");

        tracing::info!("Loading reference data...");
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} species and {} city series",
            data.species.len(),
            data.series.len()
        );
        self.monitor.log_phase(RunPhase::Extract);

        tracing::info!("Resolving request and computing recommendations...");
        let result = self.pipeline.transform(data).await?;
        tracing::info!(
            "Computed {} recommendations for {} ({})",
            result.recommendations.len(),
            result.city,
            result.year
        );
        self.monitor.log_phase(RunPhase::Transform);

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_phase(RunPhase::Load);
        self.monitor.log_summary();

        Ok(output_path)
    }
}
