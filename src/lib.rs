// Module declarations in dependency order
pub mod utils;
pub mod config;
pub mod core;
pub mod processing;
pub mod reporting;
pub mod commands;

// Public exports for external consumers
pub use config::{Configuration, Properties, ServerSettings};
pub use core::{AppState, Architecture, Scenario};
pub use processing::{CostModel, PricingConstants, ScenarioEvaluator, evaluate_scenarios};
pub use reporting::ScenarioReport;
pub use utils::{ConfigError, CostError, EstimatorError, EstimatorResult};

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
