//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `NEARBITE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::policy::{NORMAL_HOURS_SERVING_RADIUS_KM, PEAK_HOURS_SERVING_RADIUS_KM, ServingPolicy};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `NEARBITE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8081`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding `restaurants.json` and `menus.json`. Default: `./data`.
    pub data_path: PathBuf,

    /// Whether the proximity cache is used at all. Default: `true`.
    pub cache_enabled: bool,

    /// Max geohash cells held in the cache. Default: `10_000`.
    pub cache_capacity: u64,

    /// Per-entry lifetime. Default: none (entries live until evicted).
    pub cache_ttl: Option<Duration>,

    /// Serving radius inside peak windows. Default: `3.0`.
    pub peak_radius_km: f64,

    /// Serving radius outside peak windows. Default: `5.0`.
    pub normal_radius_km: f64,
}

/// Default snapshot directory used when `NEARBITE_DATA_PATH` is not set.
pub const DEFAULT_DATA_PATH: &str = "./data";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8081,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            cache_enabled: true,
            cache_capacity: 10_000,
            cache_ttl: None,
            peak_radius_km: PEAK_HOURS_SERVING_RADIUS_KM,
            normal_radius_km: NORMAL_HOURS_SERVING_RADIUS_KM,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "NEARBITE_PORT";
    const ENV_BIND_ADDR: &'static str = "NEARBITE_BIND_ADDR";
    const ENV_DATA_PATH: &'static str = "NEARBITE_DATA_PATH";
    const ENV_CACHE_ENABLED: &'static str = "NEARBITE_CACHE_ENABLED";
    const ENV_CACHE_CAPACITY: &'static str = "NEARBITE_CACHE_CAPACITY";
    const ENV_CACHE_TTL_SECS: &'static str = "NEARBITE_CACHE_TTL_SECS";
    const ENV_PEAK_RADIUS_KM: &'static str = "NEARBITE_PEAK_RADIUS_KM";
    const ENV_NORMAL_RADIUS_KM: &'static str = "NEARBITE_NORMAL_RADIUS_KM";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let data_path = Self::parse_path_from_env(Self::ENV_DATA_PATH, defaults.data_path);
        let cache_enabled = Self::parse_bool_from_env(Self::ENV_CACHE_ENABLED, defaults.cache_enabled);
        let cache_capacity =
            Self::parse_u64_from_env(Self::ENV_CACHE_CAPACITY, defaults.cache_capacity);
        let cache_ttl = env::var(Self::ENV_CACHE_TTL_SECS)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let peak_radius_km =
            Self::parse_f64_from_env(Self::ENV_PEAK_RADIUS_KM, defaults.peak_radius_km)?;
        let normal_radius_km =
            Self::parse_f64_from_env(Self::ENV_NORMAL_RADIUS_KM, defaults.normal_radius_km)?;

        Ok(Self {
            port,
            bind_addr,
            data_path,
            cache_enabled,
            cache_capacity,
            cache_ttl,
            peak_radius_km,
            normal_radius_km,
        })
    }

    /// Validates paths and radii (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.exists() && !self.data_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.data_path.clone(),
            });
        }

        for (name, value) in [
            (Self::ENV_PEAK_RADIUS_KM, self.peak_radius_km),
            (Self::ENV_NORMAL_RADIUS_KM, self.normal_radius_km),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidRadius { name, value });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Serving policy with the configured radii.
    pub fn serving_policy(&self) -> ServingPolicy {
        ServingPolicy::new(self.peak_radius_km, self.normal_radius_km)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(default)
    }

    fn parse_bool_from_env(var_name: &str, default: bool) -> bool {
        env::var(var_name)
            .map(|s| {
                let s = s.trim().to_ascii_lowercase();
                s != "false" && s != "0"
            })
            .unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::FloatParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }
}
