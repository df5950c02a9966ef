pub mod error;
pub mod validation;
pub mod formats;

pub use error::{ConfigError, CostError, EstimatorError, EstimatorResult};
pub use validation::validate_config;
pub use formats::{OutputFormat, format_count, format_dollars, format_quantity};
