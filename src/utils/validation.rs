use crate::config::{
    Configuration, KEY_BASE_MEMORY_MB, KEY_BATCH_INCREMENT, KEY_MAX_BATCH_SIZE,
    KEY_PER_MESSAGE_MS, KEY_WARM_LATENCY_MS,
};
use crate::utils::ConfigError;

/// Validates a configuration before it reaches the cost model
pub fn validate_config(config: &Configuration) -> Result<(), ConfigError> {
    if config.base_memory_mb == 0 {
        return Err(ConfigError::invalid(
            format!("{} must be greater than 0", KEY_BASE_MEMORY_MB)
        ));
    }

    if config.max_batch_size == 0 {
        return Err(ConfigError::invalid(
            format!("{} must be greater than 0", KEY_MAX_BATCH_SIZE)
        ));
    }

    // Divisor of the memory step calculation
    if config.batch_increment == 0 {
        return Err(ConfigError::invalid(
            format!("{} must be greater than 0", KEY_BATCH_INCREMENT)
        ));
    }

    validate_millis(KEY_PER_MESSAGE_MS, config.per_message_ms)?;
    validate_millis(KEY_WARM_LATENCY_MS, config.warm_latency_ms)?;

    Ok(())
}

fn validate_millis(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::invalid(
            format!("{} must be a non-negative number, got {}", key, value)
        ));
    }
    Ok(())
}
