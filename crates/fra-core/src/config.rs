use crate::error::{FraError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the claim FeatureCollection
pub const DEFAULT_CLAIMS_FILE: &str = "output/fra_claims.geojson";

/// Default location of the precomputed statistics
pub const DEFAULT_ANALYTICS_FILE: &str = "output/fra_analytics.json";

pub const CLAIMS_FILE_ENV: &str = "FRA_CLAIMS_FILE";
pub const ANALYTICS_FILE_ENV: &str = "FRA_ANALYTICS_FILE";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    Default,
    File,
    Environment,
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Replace the value unless the current one came from a higher layer
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Where the store reads its two input files from
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub claims_file: ConfigValue<PathBuf>,
    pub analytics_file: ConfigValue<PathBuf>,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LayeredConfig {
    pub fn with_defaults() -> Self {
        Self {
            claims_file: ConfigValue::new(PathBuf::from(DEFAULT_CLAIMS_FILE), ConfigSource::Default),
            analytics_file: ConfigValue::new(
                PathBuf::from(DEFAULT_ANALYTICS_FILE),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| FraError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FraError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(claims_file) = file_config.claims_file {
            self.claims_file.update(claims_file, ConfigSource::File);
        }
        if let Some(analytics_file) = file_config.analytics_file {
            self.analytics_file.update(analytics_file, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from `FRA_*` environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Some(path) = env_path(CLAIMS_FILE_ENV) {
            self.claims_file.update(path, ConfigSource::Environment);
        }
        if let Some(path) = env_path(ANALYTICS_FILE_ENV) {
            self.analytics_file.update(path, ConfigSource::Environment);
        }
        self
    }

    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(claims_file) = overrides.claims_file {
            self.claims_file.update(claims_file, ConfigSource::Cli);
        }
        if let Some(analytics_file) = overrides.analytics_file {
            self.analytics_file.update(analytics_file, ConfigSource::Cli);
        }
    }

    /// Defaults, then the optional file, then the environment
    pub fn resolve(config_file: Option<&Path>) -> Result<Self> {
        let config = Self::with_defaults();
        let config = match config_file {
            Some(path) => config.load_from_file(path)?,
            None => config,
        };
        Ok(config.load_from_env())
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "claims_file".to_string(),
            (self.claims_file.value.display().to_string(), self.claims_file.source),
        );
        map.insert(
            "analytics_file".to_string(),
            (self.analytics_file.value.display().to_string(), self.analytics_file.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    claims_file: Option<PathBuf>,
    analytics_file: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub claims_file: Option<PathBuf>,
    pub analytics_file: Option<PathBuf>,
}

/// A path from the environment; blank values are ignored with a warning
fn env_path(var: &str) -> Option<PathBuf> {
    let raw = env::var(var).ok()?;
    if raw.trim().is_empty() {
        tracing::warn!("Ignoring empty {} value", var);
        return None;
    }
    Some(PathBuf::from(raw))
}
