use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::utils::{ConfigError, validate_config};
use super::loader::{Properties, load_properties};

pub const KEY_BASE_MEMORY_MB: &str = "base_lambda_memory_mb";
pub const KEY_PER_MESSAGE_MS: &str = "process_per_message_ms";
pub const KEY_WARM_LATENCY_MS: &str = "warm_latency_ms";
pub const KEY_MAX_BATCH_SIZE: &str = "max_batch_size";
pub const KEY_BATCH_MEMORY_OVERHEAD_MB: &str = "batch_memory_overhead_mb";
pub const KEY_BATCH_INCREMENT: &str = "batch_increment";
pub const KEY_SERVER_PORT: &str = "server_port";

pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Function sizing inputs for the cost model.
///
/// Loaded once at startup and passed by reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Memory of a function handling a single message
    #[serde(rename = "baseMemoryMb")]
    pub base_memory_mb: u32,
    /// Processing time added per message in a batch
    #[serde(rename = "perMessageMs")]
    pub per_message_ms: f64,
    /// Fixed per-invocation overhead
    #[serde(rename = "warmLatencyMs")]
    pub warm_latency_ms: f64,
    /// Largest batch size the queue trigger allows
    #[serde(rename = "maxBatchSize")]
    pub max_batch_size: u32,
    /// Extra memory needed per `batch_increment` messages
    #[serde(rename = "batchMemoryOverheadMb")]
    pub batch_memory_overhead_mb: u32,
    /// Number of messages that triggers another memory overhead step
    #[serde(rename = "batchIncrement")]
    pub batch_increment: u32,
}

impl Configuration {
    /// Builds a validated configuration from parsed properties.
    pub fn from_properties(props: &Properties) -> Result<Self, ConfigError> {
        let config = Self {
            base_memory_mb: unsigned(props, KEY_BASE_MEMORY_MB)?,
            per_message_ms: f64::from(unsigned(props, KEY_PER_MESSAGE_MS)?),
            warm_latency_ms: f64::from(unsigned(props, KEY_WARM_LATENCY_MS)?),
            max_batch_size: unsigned(props, KEY_MAX_BATCH_SIZE)?,
            batch_memory_overhead_mb: unsigned(props, KEY_BATCH_MEMORY_OVERHEAD_MB)?,
            batch_increment: unsigned(props, KEY_BATCH_INCREMENT)?,
        };
        validate_config(&config)?;
        Ok(config)
    }

    /// Loads the property file at `path` and returns both the typed
    /// configuration and the raw properties for display.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, Properties), ConfigError> {
        let path = path.as_ref();
        let props = load_properties(path)?;
        let config = Self::from_properties(&props)?;
        info!(
            "Configuration loaded from {}: base {}MB, max batch {}",
            path.display(),
            config.base_memory_mb,
            config.max_batch_size
        );
        Ok((config, props))
    }
}

/// Where the report server listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl ServerSettings {
    /// Reads the optional `server_port` key, falling back to defaults.
    pub fn from_properties(props: &Properties) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        if let Some(port) = props.get(KEY_SERVER_PORT) {
            settings.port = u16::try_from(port).map_err(|_| {
                ConfigError::invalid(format!("{} must be between 0 and {}, got {}", KEY_SERVER_PORT, u16::MAX, port))
            })?;
        }
        Ok(settings)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn unsigned(props: &Properties, key: &str) -> Result<u32, ConfigError> {
    let value = props.require(key)?;
    u32::try_from(value).map_err(|_| {
        ConfigError::invalid(format!("{} must be between 0 and {}, got {}", key, u32::MAX, value))
    })
}
