use anyhow::Result;
use tempfile::TempDir;
use tree_offset::utils::error::{ErrorSeverity, RecError};
use tree_offset::{CliConfig, CsvPipeline, LocalStorage, RecommendationEngine};

const TREES_CSV: &str = "\
Tree,Average CO2 Consumption
Larch,20.0
Pine,15.0
Douglas Fir,22.3
Fir,18.6
Spruce,17.1
Oak,21.8
Beech,12.5
";

const EMISSIONS_CSV: &str = "\
City,Year,Predicted Emissions
Helsinki,2022,100.0
Helsinki,2023,95.5
Helsinki,2024,91.0
Helsinki,2025,87.2
Åland,2022,50.0
Åland,2023,48.5
";

struct Fixture {
    _temp_dir: TempDir,
    output_path: String,
    species_file: String,
    emissions_file: String,
}

fn write_fixture() -> Result<Fixture> {
    let temp_dir = TempDir::new()?;
    let species_file = temp_dir.path().join("trees.csv");
    let emissions_file = temp_dir.path().join("predicted_emissions.csv");
    std::fs::write(&species_file, TREES_CSV)?;
    std::fs::write(&emissions_file, EMISSIONS_CSV)?;

    let output_path = temp_dir.path().join("output").display().to_string();

    Ok(Fixture {
        species_file: species_file.display().to_string(),
        emissions_file: emissions_file.display().to_string(),
        output_path,
        _temp_dir: temp_dir,
    })
}

fn config_for(fixture: &Fixture, city: &str, year: i32) -> CliConfig {
    CliConfig {
        species_file: fixture.species_file.clone(),
        emissions_file: fixture.emissions_file.clone(),
        city: city.to_string(),
        year,
        species: vec![],
        output_path: fixture.output_path.clone(),
        verbose: false,
        monitor: false,
    }
}

fn engine_for(
    fixture: &Fixture,
    city: &str,
    year: i32,
) -> RecommendationEngine<CsvPipeline<LocalStorage, CliConfig>> {
    let config = config_for(fixture, city, year);
    let storage = LocalStorage::new(fixture.output_path.clone());
    RecommendationEngine::new(CsvPipeline::new(storage, config))
}

#[tokio::test]
async fn test_end_to_end_recommendation_run() -> Result<()> {
    let fixture = write_fixture()?;
    let engine = engine_for(&fixture, "Helsinki", 2022);

    let output_file = engine.run().await?;
    assert!(output_file.contains("recommendations.csv"));

    let csv_content = std::fs::read_to_string(&output_file)?;
    assert!(csv_content.starts_with("Tree,Recommended Tree Amount"));
    // 100.0 kg predicted for 2022; counts truncate.
    assert!(csv_content.contains("Larch,5"));
    assert!(csv_content.contains("Pine,6"));
    assert!(csv_content.contains("Beech,8"));

    // Every species from the reference table appears, in table order.
    let species: Vec<&str> = csv_content
        .lines()
        .skip(1)
        .filter(|l| !l.is_empty())
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(
        species,
        vec!["Larch", "Pine", "Douglas Fir", "Fir", "Spruce", "Oak", "Beech"]
    );

    Ok(())
}

#[tokio::test]
async fn test_json_output_carries_city_and_year() -> Result<()> {
    let fixture = write_fixture()?;
    let engine = engine_for(&fixture, "helsinki", 2023);

    engine.run().await?;

    let json_path = std::path::Path::new(&fixture.output_path).join("recommendations.json");
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(json_path)?)?;

    assert_eq!(json["city"], "Helsinki");
    assert_eq!(json["year"], 2023);
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 7);

    Ok(())
}

#[tokio::test]
async fn test_diacritic_folded_city_query_resolves() -> Result<()> {
    let fixture = write_fixture()?;
    let engine = engine_for(&fixture, "aland", 2022);

    let output_file = engine.run().await?;
    let csv_content = std::fs::read_to_string(&output_file)?;

    // 50.0 kg for Åland in 2022.
    assert!(csv_content.contains("Larch,2"));
    assert!(csv_content.contains("Pine,3"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_city_is_a_recoverable_miss() -> Result<()> {
    let fixture = write_fixture()?;
    let engine = engine_for(&fixture, "Atlantis", 2022);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, RecError::CityNotFound { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Low);

    // The calculator never ran, so nothing was written.
    let csv_path = std::path::Path::new(&fixture.output_path).join("recommendations.csv");
    assert!(!csv_path.exists());

    Ok(())
}

#[tokio::test]
async fn test_year_outside_prediction_window_is_rejected() -> Result<()> {
    let fixture = write_fixture()?;
    let engine = engine_for(&fixture, "Helsinki", 2026);

    let err = engine.run().await.unwrap_err();
    match err {
        RecError::YearNotFound { year, .. } => assert_eq!(year, 2026),
        other => panic!("expected YearNotFound, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_year_missing_from_series_is_rejected() -> Result<()> {
    let fixture = write_fixture()?;
    // Åland only has predictions for 2022 and 2023.
    let engine = engine_for(&fixture, "Åland", 2025);

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, RecError::YearNotFound { .. }));

    Ok(())
}

#[tokio::test]
async fn test_species_filter_restricts_the_output() -> Result<()> {
    let fixture = write_fixture()?;
    let mut config = config_for(&fixture, "Helsinki", 2022);
    config.species = vec!["Oak".to_string(), "Larch".to_string()];

    let storage = LocalStorage::new(fixture.output_path.clone());
    let engine = RecommendationEngine::new(CsvPipeline::new(storage, config));

    let output_file = engine.run().await?;
    let csv_content = std::fs::read_to_string(output_file)?;

    let species: Vec<&str> = csv_content
        .lines()
        .skip(1)
        .filter(|l| !l.is_empty())
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(species, vec!["Oak", "Larch"]);

    Ok(())
}

#[tokio::test]
async fn test_unknown_species_in_filter_is_a_lookup_failure() -> Result<()> {
    let fixture = write_fixture()?;
    let mut config = config_for(&fixture, "Helsinki", 2022);
    config.species = vec!["Birch".to_string()];

    let storage = LocalStorage::new(fixture.output_path.clone());
    let engine = RecommendationEngine::new(CsvPipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Low);
    match err {
        RecError::LookupFailure { species } => assert_eq!(species, "Birch"),
        other => panic!("expected LookupFailure, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn test_returned_path_is_where_storage_wrote() -> Result<()> {
    let fixture = write_fixture()?;
    // Point the config's output path somewhere else entirely; the reported
    // location must still be the one the storage backend resolved.
    let mut config = config_for(&fixture, "Helsinki", 2022);
    config.output_path = "/nonexistent/elsewhere".to_string();

    let storage_base = fixture._temp_dir.path().join("actual-output");
    let storage = LocalStorage::new(storage_base.display().to_string());
    let engine = RecommendationEngine::new(CsvPipeline::new(storage, config));

    let output_file = engine.run().await?;

    assert!(output_file.starts_with(&storage_base.display().to_string()));
    assert!(std::path::Path::new(&output_file).exists());
    let csv_content = std::fs::read_to_string(&output_file)?;
    assert!(csv_content.contains("Larch,5"));

    Ok(())
}

#[tokio::test]
async fn test_missing_species_file_is_an_io_error() -> Result<()> {
    let fixture = write_fixture()?;
    let mut config = config_for(&fixture, "Helsinki", 2022);
    config.species_file = format!("{}/does-not-exist.csv", fixture.output_path);

    let storage = LocalStorage::new(fixture.output_path.clone());
    let engine = RecommendationEngine::new(CsvPipeline::new(storage, config));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, RecError::IoError(_)));
    assert_eq!(err.severity(), ErrorSeverity::Critical);

    Ok(())
}
