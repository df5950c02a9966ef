//! Core types for scenario results.

use std::fmt;
use serde::{Deserialize, Serialize};

/// CPU architecture a function can be billed under.
///
/// The two architectures differ only in their per GB-second compute rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    Arm,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Architecture::X86, Architecture::Arm];

    /// Human readable label used in tables and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::Arm => "ARM",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monthly cost of one scenario at one point of the volume sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeCost {
    /// Message volume in millions per day
    #[serde(rename = "millionMessagesPerDay")]
    pub million_messages_per_day: f64,
    /// Invocations per day, in thousands
    #[serde(rename = "invocationsThousandsPerDay")]
    pub invocations_thousands_per_day: f64,
    /// Monthly dollar cost on x86
    #[serde(rename = "costX86")]
    pub cost_x86: f64,
    /// Monthly dollar cost on ARM
    #[serde(rename = "costArm")]
    pub cost_arm: f64,
}

impl VolumeCost {
    pub fn cost(&self, architecture: Architecture) -> f64 {
        match architecture {
            Architecture::X86 => self.cost_x86,
            Architecture::Arm => self.cost_arm,
        }
    }
}

/// Summary figures for a scenario at the fixed headline volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadlineFigures {
    #[serde(rename = "messagesPerDay")]
    pub messages_per_day: u64,
    #[serde(rename = "requestsPerDay")]
    pub requests_per_day: f64,
    #[serde(rename = "requestsPerMonth")]
    pub requests_per_month: f64,
    #[serde(rename = "gbSecondsPerMonth")]
    pub gb_seconds_per_month: f64,
    #[serde(rename = "costX86")]
    pub cost_x86: f64,
    #[serde(rename = "costArm")]
    pub cost_arm: f64,
}

impl HeadlineFigures {
    pub fn cost(&self, architecture: Architecture) -> f64 {
        match architecture {
            Architecture::X86 => self.cost_x86,
            Architecture::Arm => self.cost_arm,
        }
    }
}

/// One evaluated batch size.
///
/// Produced once per batch size during evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Messages delivered per invocation
    #[serde(rename = "batchSize")]
    pub batch_size: u32,
    /// Memory the batch would need before tier rounding
    #[serde(rename = "requiredMemoryMb")]
    pub required_memory_mb: u64,
    /// Allowed memory tier the function runs with
    #[serde(rename = "memoryMb")]
    pub memory_mb: u32,
    /// True when the requirement exceeded every tier and was capped
    #[serde(rename = "memoryClamped")]
    pub memory_clamped: bool,
    /// Invocation duration in milliseconds
    #[serde(rename = "durationMs")]
    pub duration_ms: f64,
    /// Costs across the volume sweep, in sweep order
    #[serde(rename = "volumeCosts")]
    pub volume_costs: Vec<VolumeCost>,
    /// Figures at the headline volume
    pub headline: HeadlineFigures,
}

impl Scenario {
    /// Cost vector for one architecture, aligned with the volume sweep.
    pub fn cost_vector(&self, architecture: Architecture) -> Vec<f64> {
        self.volume_costs.iter().map(|point| point.cost(architecture)).collect()
    }

    pub fn memory_gb(&self) -> f64 {
        f64::from(self.memory_mb) / 1024.0
    }

    pub fn duration_sec(&self) -> f64 {
        self.duration_ms / 1000.0
    }
}
