use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::subnets::SubnetsConfig;

const LOCAL_CONFIG_PATH: &str = "zone-finder.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/zone-finder/config.toml";

/// Main configuration structure for zone-finder
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Resolution cache bounds
    #[serde(default)]
    pub cache: CacheConfig,

    /// Name resolution
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Prefix table source
    #[serde(default)]
    pub subnets: SubnetsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zone-finder.toml in current directory
    /// 3. /etc/zone-finder/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(ttl) = overrides.cache_ttl_secs {
            self.cache.ttl_secs = ttl;
        }
        if let Some(max_entries) = overrides.cache_max_entries {
            self.cache.max_entries = max_entries;
        }
        if let Some(file) = overrides.subnets_file {
            self.subnets.file = file;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.cache.ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "Cache TTL must be at least 1 second".to_string(),
            ));
        }

        if self.cache.max_entries == 0 {
            return Err(ConfigError::Validation(
                "Cache max_entries must be at least 1".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.subnets.file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No subnets file configured".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub cache_ttl_secs: Option<u64>,
    pub cache_max_entries: Option<usize>,
    pub subnets_file: Option<String>,
}
