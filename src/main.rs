// This is the primary entry point for the cost estimator.
// The lib.rs file serves only as a public API for external consumers.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use lambda_batch_cost_lib::commands::serve;
use lambda_batch_cost_lib::{AppState, Configuration, ScenarioReport, ServerSettings};

const DEFAULT_CONFIG_PATH: &str = "input.prop";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    info!("=== Cost Estimator Starting ===");

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let (config, properties) = Configuration::load(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path))?;
    let settings = ServerSettings::from_properties(&properties)
        .context("invalid server settings")?;

    let state = AppState::new(config, properties).context("scenario evaluation failed")?;
    info!("\n{}", ScenarioReport::new(state.properties(), state.scenarios()));

    serve(state, settings.socket_addr()).await.context("report server failed")?;

    info!("Cost estimator exiting");
    Ok(())
}
