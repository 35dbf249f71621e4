use clap::Parser;
use tree_offset::utils::{logger, validation::Validate};
use tree_offset::{CliConfig, CsvPipeline, LocalStorage, RecommendationEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tree-offset CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CsvPipeline::new(storage, config);

    let engine = RecommendationEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Recommendation run completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Recommendation run completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Recommendation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // Resolution misses (unknown city, year outside the prediction
            // window) show an empty recommendation and exit cleanly; the
            // session must survive one bad lookup.
            let exit_code = match e.severity() {
                tree_offset::utils::error::ErrorSeverity::Low => {
                    println!("No recommendation available for this request.");
                    0
                }
                tree_offset::utils::error::ErrorSeverity::Medium => 2,
                tree_offset::utils::error::ErrorSeverity::High => 1,
                tree_offset::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
