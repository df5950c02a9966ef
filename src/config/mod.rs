//! Startup configuration.
//!
//! - [`load_properties`]: reads a flat `key=value` property file
//! - [`Configuration`]: the typed, validated sizing inputs for the cost model
//! - [`ServerSettings`]: listen address for the report server

mod loader;
mod settings;

pub use loader::{Properties, load_properties, parse_properties};
pub use settings::{
    Configuration, ServerSettings, DEFAULT_SERVER_PORT,
    KEY_BASE_MEMORY_MB, KEY_PER_MESSAGE_MS, KEY_WARM_LATENCY_MS, KEY_MAX_BATCH_SIZE,
    KEY_BATCH_MEMORY_OVERHEAD_MB, KEY_BATCH_INCREMENT, KEY_SERVER_PORT,
};
