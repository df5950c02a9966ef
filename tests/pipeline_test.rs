use std::fs;
use lambda_batch_cost_lib::config::{Configuration, ServerSettings};
use lambda_batch_cost_lib::core::{AppState, Architecture};
use lambda_batch_cost_lib::processing::{BATCH_SIZE_CATALOG, VOLUME_SWEEP_MILLIONS_PER_DAY, evaluate_scenarios};
use lambda_batch_cost_lib::reporting::{ChartData, ScenarioReport};
use lambda_batch_cost_lib::{ConfigError, EstimatorError};

const INPUT: &str = "\
# sizing
base_lambda_memory_mb=128
process_per_message_ms=20
warm_latency_ms=50
max_batch_size=10000
batch_memory_overhead_mb=128
batch_increment=100
server_port=9000
";

fn write_input(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.prop");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_load_evaluate_and_report() {
    let (_dir, path) = write_input(INPUT);
    let (config, properties) = Configuration::load(&path).unwrap();
    assert_eq!(ServerSettings::from_properties(&properties).unwrap().port, 9000);

    let scenarios = evaluate_scenarios(&config).unwrap();
    assert_eq!(scenarios.len(), BATCH_SIZE_CATALOG.len());

    for scenario in &scenarios {
        assert_eq!(scenario.volume_costs.len(), VOLUME_SWEEP_MILLIONS_PER_DAY.len());
        assert_eq!(scenario.duration_ms, 50.0 + 20.0 * f64::from(scenario.batch_size));
    }

    // 128 + 128 * (10000 / 100) exceeds the 4096MB ceiling
    let largest = scenarios.last().unwrap();
    assert_eq!(largest.memory_mb, 4096);
    assert!(largest.memory_clamped);

    let report = ScenarioReport::new(&properties, &scenarios).to_string();
    assert!(report.contains("- server_port: 9000"));
    assert!(report.contains("Cheapest on x86"));

    let chart = ChartData::from_scenarios(&scenarios);
    assert_eq!(chart.cost_series.len(), scenarios.len() * Architecture::ALL.len());
}

#[test]
fn test_batching_reduces_request_charges() {
    let (_dir, path) = write_input(INPUT);
    let (config, _) = Configuration::load(&path).unwrap();
    let scenarios = evaluate_scenarios(&config).unwrap();

    let requests: Vec<f64> = scenarios.iter().map(|s| s.headline.requests_per_month).collect();
    for pair in requests.windows(2) {
        assert!(pair[1] < pair[0]);
    }
}

#[test]
fn test_app_state_is_reproducible() {
    let (_dir, path) = write_input(INPUT);
    let (config, properties) = Configuration::load(&path).unwrap();

    let first = AppState::new(config.clone(), properties.clone()).unwrap();
    let second = AppState::new(config, properties).unwrap();
    assert_eq!(first.scenarios(), second.scenarios());
}

#[test]
fn test_missing_key_is_fatal() {
    let (_dir, path) = write_input("base_lambda_memory_mb=128\n");
    let err = Configuration::load(&path).unwrap_err();
    assert_eq!(err, ConfigError::missing_key("process_per_message_ms"));

    let wrapped: EstimatorError = err.into();
    assert!(wrapped.to_string().starts_with("Config error:"));
}
