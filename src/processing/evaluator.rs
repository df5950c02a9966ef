//! Scenario evaluation across the batch-size domain.

use tracing::{debug, info};
use crate::config::Configuration;
use crate::core::{Architecture, HeadlineFigures, Scenario, VolumeCost};
use crate::utils::{ConfigError, CostError, EstimatorResult};
use super::pricing::CostModel;
use super::ranges::{
    BatchSizeSet, MemoryTierSet, MAX_LAMBDA_MEMORY_MB, MEMORY_STEP_MB,
    build_batch_sizes, build_memory_tiers,
};

/// Message volumes, in millions per day, every scenario is priced at.
pub const VOLUME_SWEEP_MILLIONS_PER_DAY: [f64; 11] = [
    0.1, 0.5, 1.0, 5.0, 10.0, 15.0, 20.0, 50.0, 100.0, 200.0, 250.0,
];

/// Volume used for the per-scenario summary row.
pub const HEADLINE_VOLUME_MILLIONS_PER_DAY: f64 = 10.0;

/// Evaluates every candidate batch size for one configuration.
///
/// Holds only derived read-only data; evaluating twice yields identical rows.
#[derive(Debug, Clone)]
pub struct ScenarioEvaluator {
    config: Configuration,
    tiers: MemoryTierSet,
    batch_sizes: BatchSizeSet,
    cost_model: CostModel,
}

impl ScenarioEvaluator {
    pub fn new(config: &Configuration) -> Result<Self, ConfigError> {
        Self::with_cost_model(config, CostModel::default())
    }

    pub fn with_cost_model(config: &Configuration, cost_model: CostModel) -> Result<Self, ConfigError> {
        let batch_sizes = build_batch_sizes(config.max_batch_size);
        if batch_sizes.is_empty() {
            return Err(ConfigError::invalid(format!(
                "max_batch_size {} admits no batch sizes",
                config.max_batch_size
            )));
        }
        let tiers = build_memory_tiers(config.base_memory_mb, MEMORY_STEP_MB, MAX_LAMBDA_MEMORY_MB);

        Ok(Self {
            config: config.clone(),
            tiers,
            batch_sizes,
            cost_model,
        })
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Invocation time: warm overhead plus linear per-message processing.
    pub fn duration_ms(&self, batch_size: u32) -> f64 {
        self.config.warm_latency_ms + self.config.per_message_ms * f64::from(batch_size)
    }

    /// Memory grows by one overhead step per full `batch_increment` messages.
    pub fn required_memory_mb(&self, batch_size: u32) -> u64 {
        let steps = u64::from(batch_size / self.config.batch_increment.max(1));
        u64::from(self.config.base_memory_mb) + u64::from(self.config.batch_memory_overhead_mb) * steps
    }

    /// Produces one scenario per batch size, in ascending batch order.
    pub fn evaluate(&self) -> Result<Vec<Scenario>, CostError> {
        let scenarios = self
            .batch_sizes
            .iter()
            .map(|batch_size| self.evaluate_batch(batch_size))
            .collect::<Result<Vec<_>, _>>()?;
        info!("Evaluated {} scenarios", scenarios.len());
        Ok(scenarios)
    }

    pub fn evaluate_batch(&self, batch_size: u32) -> Result<Scenario, CostError> {
        let duration_ms = self.duration_ms(batch_size);
        let required_memory_mb = self.required_memory_mb(batch_size);
        let memory_mb = self.tiers.resolve(required_memory_mb);
        let memory_gb = f64::from(memory_mb) / 1024.0;
        let duration_sec = duration_ms / 1000.0;

        let volume_costs = VOLUME_SWEEP_MILLIONS_PER_DAY
            .iter()
            .map(|&volume| -> Result<VolumeCost, CostError> {
                Ok(VolumeCost {
                    million_messages_per_day: volume,
                    invocations_thousands_per_day: self.cost_model.invocations_thousands_per_day(volume, batch_size)?,
                    cost_x86: self.cost_model.monthly_cost(volume, memory_gb, duration_sec, Architecture::X86, batch_size)?,
                    cost_arm: self.cost_model.monthly_cost(volume, memory_gb, duration_sec, Architecture::Arm, batch_size)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let headline = self.headline(batch_size, memory_gb, duration_sec)?;

        debug!(
            "Batch {}: {}MB (required {}MB), {:.1}ms, ${:.2} x86 / ${:.2} ARM at headline volume",
            batch_size, memory_mb, required_memory_mb, duration_ms, headline.cost_x86, headline.cost_arm
        );

        Ok(Scenario {
            batch_size,
            required_memory_mb,
            memory_mb,
            memory_clamped: required_memory_mb > u64::from(self.tiers.largest()),
            duration_ms,
            volume_costs,
            headline,
        })
    }

    fn headline(&self, batch_size: u32, memory_gb: f64, duration_sec: f64) -> Result<HeadlineFigures, CostError> {
        let volume = HEADLINE_VOLUME_MILLIONS_PER_DAY;
        let x86 = self.cost_model.breakdown(volume, memory_gb, duration_sec, Architecture::X86, batch_size)?;
        let arm = self.cost_model.breakdown(volume, memory_gb, duration_sec, Architecture::Arm, batch_size)?;
        let messages_per_day = volume * 1_000_000.0;

        Ok(HeadlineFigures {
            messages_per_day: messages_per_day as u64,
            requests_per_day: messages_per_day / f64::from(batch_size),
            requests_per_month: x86.requests_per_month,
            gb_seconds_per_month: x86.gb_seconds_per_month,
            cost_x86: x86.total,
            cost_arm: arm.total,
        })
    }
}

/// Evaluates all scenarios for `config`.
pub fn evaluate_scenarios(config: &Configuration) -> EstimatorResult<Vec<Scenario>> {
    let evaluator = ScenarioEvaluator::new(config)?;
    Ok(evaluator.evaluate()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn example_config() -> Configuration {
        Configuration {
            base_memory_mb: 128,
            per_message_ms: 1.0,
            warm_latency_ms: 5.0,
            max_batch_size: 10,
            batch_memory_overhead_mb: 64,
            batch_increment: 5,
        }
    }

    #[test]
    fn test_example_configuration() {
        let scenarios = evaluate_scenarios(&example_config()).unwrap();
        let batches: Vec<u32> = scenarios.iter().map(|s| s.batch_size).collect();
        assert_eq!(batches, vec![1, 5, 10]);

        let last = &scenarios[2];
        assert_eq!(last.duration_ms, 15.0);
        assert_eq!(last.required_memory_mb, 256);
        assert_eq!(last.memory_mb, 256);
        assert!(!last.memory_clamped);
    }

    #[test]
    fn test_memory_steps_are_discrete() {
        let evaluator = ScenarioEvaluator::new(&example_config()).unwrap();
        assert_eq!(evaluator.required_memory_mb(1), 128);
        assert_eq!(evaluator.required_memory_mb(4), 128);
        assert_eq!(evaluator.required_memory_mb(5), 192);
        assert_eq!(evaluator.required_memory_mb(9), 192);
    }

    #[test]
    fn test_every_scenario_covers_the_volume_sweep() {
        let scenarios = evaluate_scenarios(&example_config()).unwrap();
        for scenario in &scenarios {
            let volumes: Vec<f64> = scenario
                .volume_costs
                .iter()
                .map(|point| point.million_messages_per_day)
                .collect();
            assert_eq!(volumes, VOLUME_SWEEP_MILLIONS_PER_DAY.to_vec());
        }
    }

    #[test]
    fn test_headline_matches_sweep_at_ten_million() {
        let scenarios = evaluate_scenarios(&example_config()).unwrap();
        for scenario in &scenarios {
            let at_ten = scenario
                .volume_costs
                .iter()
                .find(|point| point.million_messages_per_day == HEADLINE_VOLUME_MILLIONS_PER_DAY)
                .unwrap();
            assert_eq!(scenario.headline.cost_x86, at_ten.cost_x86);
            assert_eq!(scenario.headline.cost_arm, at_ten.cost_arm);
            assert_eq!(scenario.headline.messages_per_day, 10_000_000);
            assert_eq!(
                scenario.headline.requests_per_day,
                10_000_000.0 / f64::from(scenario.batch_size)
            );
        }
    }

    #[test]
    fn test_requirement_above_ceiling_is_clamped() {
        let config = Configuration {
            base_memory_mb: 3072,
            max_batch_size: 10_000,
            batch_memory_overhead_mb: 512,
            batch_increment: 100,
            ..example_config()
        };
        let scenarios = evaluate_scenarios(&config).unwrap();
        let largest = scenarios.last().unwrap();

        assert_eq!(largest.batch_size, 10_000);
        assert!(largest.required_memory_mb > 4096);
        assert_eq!(largest.memory_mb, 3072 + 8 * 128);
        assert!(largest.memory_clamped);
    }

    #[test]
    fn test_base_above_ceiling_runs_with_base_memory() {
        let config = Configuration { base_memory_mb: 8192, ..example_config() };
        let scenarios = evaluate_scenarios(&config).unwrap();
        assert!(scenarios.iter().all(|s| s.memory_mb == 8192));
    }

    #[test]
    fn test_arm_never_costs_more_than_x86() {
        let scenarios = evaluate_scenarios(&example_config()).unwrap();
        for scenario in &scenarios {
            for point in &scenario.volume_costs {
                assert!(point.cost_arm <= point.cost_x86);
            }
        }
    }

    #[test]
    fn test_empty_batch_domain_is_config_error() {
        let config = Configuration { max_batch_size: 0, ..example_config() };
        assert!(matches!(
            ScenarioEvaluator::new(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_evaluation_is_idempotent(
            base in 128u32..3000,
            per_message in 0u32..500,
            warm in 0u32..2000,
            max_batch in 1u32..12_000,
            overhead in 0u32..1024,
            increment in 1u32..1000,
        ) {
            let config = Configuration {
                base_memory_mb: base,
                per_message_ms: f64::from(per_message),
                warm_latency_ms: f64::from(warm),
                max_batch_size: max_batch,
                batch_memory_overhead_mb: overhead,
                batch_increment: increment,
            };
            let first = evaluate_scenarios(&config).unwrap();
            let second = evaluate_scenarios(&config).unwrap();
            prop_assert_eq!(&first, &second);
            for scenario in &first {
                prop_assert!(scenario.volume_costs.iter().all(|p| p.cost_x86 >= 0.0 && p.cost_arm >= 0.0));
            }
        }
    }
}
