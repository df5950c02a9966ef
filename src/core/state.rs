//! Shared state for the report server.

use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use crate::config::{Configuration, Properties};
use crate::processing::{CostModel, ScenarioEvaluator};
use crate::utils::EstimatorResult;
use super::types::Scenario;

/// Read-only state handed to every request handler.
///
/// Scenarios are computed once on construction; handlers never recompute
/// or mutate them.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Configuration>,
    properties: Arc<Properties>,
    scenarios: Arc<Vec<Scenario>>,
    cost_model: CostModel,
    started_at: Instant,
}

impl AppState {
    /// Evaluates all scenarios for `config` at list prices.
    pub fn new(config: Configuration, properties: Properties) -> EstimatorResult<Self> {
        Self::with_cost_model(config, properties, CostModel::default())
    }

    /// Evaluates all scenarios with `cost_model` and keeps the model so the
    /// served pricing matches the figures.
    pub fn with_cost_model(
        config: Configuration,
        properties: Properties,
        cost_model: CostModel,
    ) -> EstimatorResult<Self> {
        let evaluator = ScenarioEvaluator::with_cost_model(&config, cost_model)?;
        let scenarios = evaluator.evaluate()?;
        debug!("AppState initialized with {} scenarios", scenarios.len());

        Ok(Self {
            config: Arc::new(config),
            properties: Arc::new(properties),
            scenarios: Arc::new(scenarios),
            cost_model: *evaluator.cost_model(),
            started_at: Instant::now(),
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
