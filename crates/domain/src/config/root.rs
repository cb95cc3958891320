use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::query_log::QueryLogConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "pinpoint-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pinpoint-dns/config.toml";

/// TTLs with the top bit set are treated as zero by resolvers (RFC 2181 §8).
const MAX_TTL: u32 = i32::MAX as u32;

/// Main configuration structure for Pinpoint DNS.
///
/// Built once at start-up and never mutated afterwards; components receive the
/// sections they need by reference or by value.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listening socket
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer policy
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub query_log: QueryLogConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pinpoint-dns.toml in current directory
    /// 3. /etc/pinpoint-dns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source was used.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(address) = overrides.answer_address {
            self.dns.answer_address = address;
        }
        if let Some(ttl) = overrides.answer_ttl {
            self.dns.answer_ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Bind address cannot be empty".to_string(),
            ));
        }

        if self
            .server
            .bind_address
            .trim_matches(|c| c == '[' || c == ']')
            .parse::<IpAddr>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "Bind address '{}' is not an IP address",
                self.server.bind_address
            )));
        }

        if self.dns.answer_ttl > MAX_TTL {
            return Err(ConfigError::Validation(format!(
                "Answer TTL {} exceeds maximum of {}",
                self.dns.answer_ttl, MAX_TTL
            )));
        }

        if self.query_log.capacity == 0 {
            return Err(ConfigError::Validation(
                "Query log capacity must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load(None, ..)` would use
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub answer_address: Option<Ipv4Addr>,
    pub answer_ttl: Option<u32>,
    pub log_level: Option<String>,
}
