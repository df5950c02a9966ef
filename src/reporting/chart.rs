//! Chart series derived from evaluated scenarios.
//!
//! The series are plain data; the HTML page hands them to a client-side
//! plotting library as JSON.

use serde::Serialize;
use crate::core::{Architecture, Scenario};

/// Y axis a series is plotted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    /// Monthly cost against message volume, one series per batch size and architecture
    #[serde(rename = "costSeries")]
    pub cost_series: Vec<ChartSeries>,
    /// Memory and duration against batch size
    #[serde(rename = "batchProfile")]
    pub batch_profile: Vec<ChartSeries>,
}

impl ChartData {
    pub fn from_scenarios(scenarios: &[Scenario]) -> Self {
        Self {
            title: "Monthly Cost vs Performance for Queue Message Batch Processing".to_string(),
            cost_series: cost_series(scenarios),
            batch_profile: batch_profile_series(scenarios),
        }
    }
}

pub fn cost_series(scenarios: &[Scenario]) -> Vec<ChartSeries> {
    scenarios
        .iter()
        .flat_map(|scenario| {
            let volumes: Vec<f64> = scenario
                .volume_costs
                .iter()
                .map(|point| point.million_messages_per_day)
                .collect();
            Architecture::ALL.into_iter().map(move |architecture| ChartSeries {
                name: format!("Cost for {} with batch size {}", architecture, scenario.batch_size),
                x: volumes.clone(),
                y: scenario.cost_vector(architecture),
                axis: Axis::Primary,
            })
        })
        .collect()
}

pub fn batch_profile_series(scenarios: &[Scenario]) -> Vec<ChartSeries> {
    let batches: Vec<f64> = scenarios.iter().map(|s| f64::from(s.batch_size)).collect();

    vec![
        ChartSeries {
            name: "Invocation memory (MB) by batch size".to_string(),
            x: batches.clone(),
            y: scenarios.iter().map(|s| f64::from(s.memory_mb)).collect(),
            axis: Axis::Primary,
        },
        ChartSeries {
            name: "Invocation duration (ms) by batch size".to_string(),
            x: batches,
            y: scenarios.iter().map(|s| s.duration_ms).collect(),
            axis: Axis::Secondary,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Configuration;
    use crate::processing::{VOLUME_SWEEP_MILLIONS_PER_DAY, evaluate_scenarios};

    fn scenarios() -> Vec<Scenario> {
        let config = Configuration {
            base_memory_mb: 256,
            per_message_ms: 10.0,
            warm_latency_ms: 40.0,
            max_batch_size: 50,
            batch_memory_overhead_mb: 128,
            batch_increment: 20,
        };
        evaluate_scenarios(&config).unwrap()
    }

    #[test]
    fn test_two_cost_series_per_batch_size() {
        let scenarios = scenarios();
        let series = cost_series(&scenarios);

        assert_eq!(series.len(), scenarios.len() * 2);
        assert_eq!(series[0].name, "Cost for x86 with batch size 1");
        assert_eq!(series[1].name, "Cost for ARM with batch size 1");
        assert_eq!(series[0].x, VOLUME_SWEEP_MILLIONS_PER_DAY.to_vec());
    }

    #[test]
    fn test_batch_profile_axes() {
        let scenarios = scenarios();
        let profile = batch_profile_series(&scenarios);

        assert_eq!(profile.len(), 2);
        assert_eq!(profile[0].x, vec![1.0, 5.0, 10.0, 20.0, 50.0]);
        assert_eq!(profile[0].y, vec![256.0, 256.0, 256.0, 384.0, 512.0]);
        assert_eq!(profile[1].axis, Axis::Secondary);
        assert_eq!(profile[1].y, vec![50.0, 90.0, 140.0, 240.0, 540.0]);
    }
}
