use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::net::{IpAddr, SocketAddr};

/// Environment variable holding the channel the site root redirects to.
pub const DEFAULT_CHANNEL_VAR: &str = "NEXT_PUBLIC_DEFAULT_CHANNEL";
/// Channel used when `NEXT_PUBLIC_DEFAULT_CHANNEL` is not set at all.
pub const FALLBACK_CHANNEL: &str = "hos";

const BIND_ADDR_VAR: &str = "BIND_ADDR";
const PORT_VAR: &str = "PORT";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";

/// A named-value lookup. Implementations must not cache across calls unless
/// the underlying values are fixed.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads straight from the process environment on every lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        // Non-unicode values are still set, so they don't fall through to a default
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Fixed set of values, for tests and for embedding without touching the environment.
#[derive(Clone, Debug, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    #[must_use]
    pub fn new() -> Self {
        StaticConfig::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAddress { host: String, port: String },
}

impl Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddress { host, port } => {
                write!(f, "Invalid listen address '{host}:{port}'")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let host = source
            .get(BIND_ADDR_VAR)
            .unwrap_or_else(|| String::from(DEFAULT_BIND_ADDR));
        let port = source
            .get(PORT_VAR)
            .unwrap_or_else(|| String::from(DEFAULT_PORT));

        match (host.parse::<IpAddr>(), port.parse::<u16>()) {
            (Ok(ip), Ok(port)) => Ok(ServerConfig {
                addr: SocketAddr::new(ip, port),
            }),
            _ => Err(ConfigError::InvalidAddress { host, port }),
        }
    }
}
