use clap::Parser;
use tree_offset::config::toml_config::TomlConfig;
use tree_offset::core::ConfigProvider;
use tree_offset::utils::{logger, validation::Validate};
use tree_offset::{CsvPipeline, LocalStorage, RecommendationEngine};

#[derive(Parser)]
#[command(name = "toml-rec")]
#[command(about = "Tree-offset recommendations driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "tree-offset.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the city from config
    #[arg(long)]
    city: Option<String>,

    /// Override the target year from config
    #[arg(long)]
    year: Option<i32>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based recommendation tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(city) = args.city.clone() {
        tracing::info!("🔧 City overridden to: {}", city);
        config.request.city = city;
    }

    if let Some(year) = args.year {
        tracing::info!("🔧 Target year overridden to: {}", year);
        config.request.year = year;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = CsvPipeline::new(storage, config);

    let engine = RecommendationEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Recommendation run completed successfully!");
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    println!("  Species table: {}", config.source.species_file);
    println!("  Emissions: {}", config.source.emissions_file);
    println!("  City: {}", config.request.city);
    println!("  Year: {}", config.request.year);
    println!("  Output: {}", config.output_path());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
