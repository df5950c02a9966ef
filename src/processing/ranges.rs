//! Discrete domains derived from configuration: allowed memory tiers and
//! candidate batch sizes.

use serde::Serialize;
use tracing::{debug, warn};

/// Step between allowed memory settings
pub const MEMORY_STEP_MB: u32 = 128;
/// Largest memory a function may be configured with
pub const MAX_LAMBDA_MEMORY_MB: u32 = 4096;

/// Batch sizes worth evaluating, ascending.
pub const BATCH_SIZE_CATALOG: [u32; 15] = [
    1, 5, 10, 20, 50, 100, 200, 400, 500, 600, 1000, 1500, 2000, 5000, 10000,
];

/// Allowed memory settings in MB, strictly increasing and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryTierSet(Vec<u32>);

impl MemoryTierSet {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn smallest(&self) -> u32 {
        self.0.first().copied().unwrap_or_default()
    }

    pub fn largest(&self) -> u32 {
        self.0.last().copied().unwrap_or_default()
    }
}

/// Candidate batch sizes, a subset of [`BATCH_SIZE_CATALOG`] in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchSizeSet(Vec<u32>);

impl BatchSizeSet {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the memory tiers `base, base + step, ...` up to and including
/// `ceiling_mb`.
///
/// A base above the ceiling yields the base as the only tier, as does a zero
/// step.
pub fn build_memory_tiers(base_memory_mb: u32, step_mb: u32, ceiling_mb: u32) -> MemoryTierSet {
    if base_memory_mb > ceiling_mb {
        warn!(
            "Base memory {}MB exceeds the {}MB ceiling, using it as the only tier",
            base_memory_mb, ceiling_mb
        );
        return MemoryTierSet(vec![base_memory_mb]);
    }
    if step_mb == 0 {
        return MemoryTierSet(vec![base_memory_mb]);
    }

    let tiers: Vec<u32> = (base_memory_mb..=ceiling_mb)
        .step_by(step_mb as usize)
        .collect();
    debug!(
        "Built {} memory tiers from {}MB to {}MB",
        tiers.len(),
        base_memory_mb,
        tiers.last().copied().unwrap_or(base_memory_mb)
    );
    MemoryTierSet(tiers)
}

/// Filters the catalog to batch sizes no larger than `max_batch_size`.
///
/// Empty only when `max_batch_size` is zero; callers treat that as a
/// configuration error.
pub fn build_batch_sizes(max_batch_size: u32) -> BatchSizeSet {
    let sizes: Vec<u32> = BATCH_SIZE_CATALOG
        .iter()
        .copied()
        .filter(|&size| size <= max_batch_size)
        .collect();
    debug!("Batch sizes up to {}: {:?}", max_batch_size, sizes);
    BatchSizeSet(sizes)
}
