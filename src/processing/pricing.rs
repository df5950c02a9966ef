//! Pricing engine.
//!
//! [`CostModel`] is the only place billing constants are applied. Usage under
//! the free tier is clipped to zero, never charged negatively.

use serde::{Deserialize, Serialize};
use crate::core::Architecture;
use crate::utils::CostError;

/// Billing rates and free-tier allowances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConstants {
    /// $ per GB-second on x86
    #[serde(rename = "computeRateX86")]
    pub compute_rate_x86: f64,
    /// $ per GB-second on ARM
    #[serde(rename = "computeRateArm")]
    pub compute_rate_arm: f64,
    /// $ per request, independent of architecture
    #[serde(rename = "requestRate")]
    pub request_rate: f64,
    #[serde(rename = "freeTierGbSeconds")]
    pub free_tier_gb_seconds: f64,
    #[serde(rename = "freeRequests")]
    pub free_requests: f64,
    #[serde(rename = "daysPerMonth")]
    pub days_per_month: f64,
}

impl PricingConstants {
    /// Public list prices for queue-triggered functions.
    pub const AWS_LAMBDA: Self = Self {
        compute_rate_x86: 0.000_016_666_7,
        compute_rate_arm: 0.000_013_333_4,
        request_rate: 0.000_000_2,
        free_tier_gb_seconds: 400_000.0,
        free_requests: 1_000_000.0,
        days_per_month: 30.41,
    };

    pub fn compute_rate(&self, architecture: Architecture) -> f64 {
        match architecture {
            Architecture::X86 => self.compute_rate_x86,
            Architecture::Arm => self.compute_rate_arm,
        }
    }
}

impl Default for PricingConstants {
    fn default() -> Self {
        Self::AWS_LAMBDA
    }
}

/// Itemised monthly bill for one architecture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub architecture: Architecture,
    #[serde(rename = "requestsPerMonth")]
    pub requests_per_month: f64,
    #[serde(rename = "gbSecondsPerMonth")]
    pub gb_seconds_per_month: f64,
    #[serde(rename = "billableRequests")]
    pub billable_requests: f64,
    #[serde(rename = "billableGbSeconds")]
    pub billable_gb_seconds: f64,
    #[serde(rename = "computeCharge")]
    pub compute_charge: f64,
    #[serde(rename = "requestCharge")]
    pub request_charge: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CostModel {
    constants: PricingConstants,
}

impl CostModel {
    pub fn new(constants: PricingConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &PricingConstants {
        &self.constants
    }

    /// Invocations needed per month to drain `volume_millions_per_day`
    /// messages at `batch_size` messages per invocation.
    pub fn requests_per_month(&self, volume_millions_per_day: f64, batch_size: u32) -> Result<f64, CostError> {
        let batch = positive_batch(batch_size)?;
        Ok(volume_millions_per_day * 1_000_000.0 * self.constants.days_per_month / batch)
    }

    /// Invocations per day, in thousands.
    pub fn invocations_thousands_per_day(&self, volume_millions_per_day: f64, batch_size: u32) -> Result<f64, CostError> {
        let batch = positive_batch(batch_size)?;
        Ok(volume_millions_per_day * 1000.0 / batch)
    }

    pub fn gb_seconds_per_month(requests_per_month: f64, memory_gb: f64, duration_sec: f64) -> f64 {
        memory_gb * requests_per_month * duration_sec
    }

    /// Applies the free tier and rates to monthly usage.
    pub fn charge(&self, requests_per_month: f64, gb_seconds_per_month: f64, architecture: Architecture) -> CostBreakdown {
        let billable_gb_seconds = (gb_seconds_per_month - self.constants.free_tier_gb_seconds).max(0.0);
        let billable_requests = (requests_per_month - self.constants.free_requests).max(0.0);
        let compute_charge = billable_gb_seconds * self.constants.compute_rate(architecture);
        let request_charge = billable_requests * self.constants.request_rate;

        CostBreakdown {
            architecture,
            requests_per_month,
            gb_seconds_per_month,
            billable_requests,
            billable_gb_seconds,
            compute_charge,
            request_charge,
            total: compute_charge + request_charge,
        }
    }

    pub fn breakdown(
        &self,
        volume_millions_per_day: f64,
        memory_gb: f64,
        duration_sec: f64,
        architecture: Architecture,
        batch_size: u32,
    ) -> Result<CostBreakdown, CostError> {
        let requests = self.requests_per_month(volume_millions_per_day, batch_size)?;
        let gb_seconds = Self::gb_seconds_per_month(requests, memory_gb, duration_sec);
        Ok(self.charge(requests, gb_seconds, architecture))
    }

    /// Monthly dollar cost after the free tier.
    pub fn monthly_cost(
        &self,
        volume_millions_per_day: f64,
        memory_gb: f64,
        duration_sec: f64,
        architecture: Architecture,
        batch_size: u32,
    ) -> Result<f64, CostError> {
        self.breakdown(volume_millions_per_day, memory_gb, duration_sec, architecture, batch_size)
            .map(|breakdown| breakdown.total)
    }
}

fn positive_batch(batch_size: u32) -> Result<f64, CostError> {
    if batch_size == 0 {
        return Err(CostError::InvalidBatchSize(0));
    }
    Ok(f64::from(batch_size))
}
