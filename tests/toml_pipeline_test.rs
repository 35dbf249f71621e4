use tempfile::TempDir;
use tree_offset::utils::validation::Validate;
use tree_offset::{CsvPipeline, LocalStorage, RecommendationEngine, TomlConfig};

#[tokio::test]
async fn test_toml_configured_run() {
    let temp_dir = TempDir::new().unwrap();
    let species_file = temp_dir.path().join("trees.csv");
    let emissions_file = temp_dir.path().join("predicted_emissions.csv");
    let output_path = temp_dir.path().join("output");

    std::fs::write(
        &species_file,
        "Tree,Average CO2 Consumption\nLarch,20.0\nPine,15.0\n",
    )
    .unwrap();
    std::fs::write(
        &emissions_file,
        "City,Year,Predicted Emissions\nJyväskylä,2024,100.0\n",
    )
    .unwrap();

    let toml_content = format!(
        r#"
[pipeline]
name = "tree-offset"
description = "integration fixture"
version = "0.1.0"

[source]
species_file = "{}"
emissions_file = "{}"

[request]
city = "jyvaskyla"
year = 2024

[load]
output_path = "{}"
"#,
        species_file.display(),
        emissions_file.display(),
        output_path.display()
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    config.validate().unwrap();

    let storage = LocalStorage::new(output_path.display().to_string());
    let engine = RecommendationEngine::new(CsvPipeline::new(storage, config));

    let output_file = engine.run().await.unwrap();
    let csv_content = std::fs::read_to_string(output_file).unwrap();

    assert!(csv_content.contains("Larch,5"));
    assert!(csv_content.contains("Pine,6"));

    let json_path = output_path.join("recommendations.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(json["city"], "Jyväskylä");
}
