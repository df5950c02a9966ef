pub mod evaluator;
pub mod memory;
pub mod pricing;
pub mod ranges;

pub use evaluator::{
    ScenarioEvaluator, evaluate_scenarios,
    HEADLINE_VOLUME_MILLIONS_PER_DAY, VOLUME_SWEEP_MILLIONS_PER_DAY,
};
pub use memory::resolve;
pub use pricing::{CostBreakdown, CostModel, PricingConstants};
pub use ranges::{
    BatchSizeSet, MemoryTierSet, BATCH_SIZE_CATALOG, MAX_LAMBDA_MEMORY_MB, MEMORY_STEP_MB,
    build_batch_sizes, build_memory_tiers,
};
