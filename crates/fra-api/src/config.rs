use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use fra_core::config::LayeredConfig;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,

    /// Optional TOML file layered under the `FRA_*` environment variables
    pub config_file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            config_file: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = match env::var("FRA_HOST") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid FRA_HOST value '{}': expected an IP address", raw);
                defaults.host
            }),
            Err(_) => defaults.host,
        };

        let port = match env::var("FRA_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid FRA_PORT value '{}': expected a port number", raw);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let cors_origin = env::var("FRA_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        let config_file = env::var("FRA_CONFIG")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Self { host, port, cors_origin, config_file }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Resolve the data file locations: defaults, config file, then environment
    pub fn data_config(&self) -> fra_core::Result<LayeredConfig> {
        LayeredConfig::resolve(self.config_file.as_deref())
    }
}
