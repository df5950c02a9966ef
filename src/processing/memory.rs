//! Rounds a memory requirement to an allowed tier.

use tracing::warn;
use super::ranges::MemoryTierSet;

/// Returns the smallest tier that holds `required_mb`, or the largest tier
/// when none does.
///
/// Requirements above the platform ceiling are capped silently by the
/// platform, so this never fails.
pub fn resolve(tiers: &MemoryTierSet, required_mb: u64) -> u32 {
    tiers
        .as_slice()
        .iter()
        .copied()
        .find(|&tier| u64::from(tier) >= required_mb)
        .unwrap_or_else(|| {
            let largest = tiers.largest();
            warn!("Required memory {}MB exceeds every tier, capping at {}MB", required_mb, largest);
            largest
        })
}

impl MemoryTierSet {
    /// See [`resolve`].
    pub fn resolve(&self, required_mb: u64) -> u32 {
        resolve(self, required_mb)
    }
}
