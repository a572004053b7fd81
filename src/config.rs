// config.rs
use crate::dataset::DatasetSource;
use crate::geocode::GeocodeRegion;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_DATASET_PATH: &str = "./dataset.json";
const DEFAULT_LOCALITY: &str = "New York City";
const DEFAULT_COUNTRY: &str = "US";
const DEFAULT_MAP_ID: &str = "DEMO_MAP_ID";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub dataset: DatasetSource,
    pub maps_api_key: String,
    pub region: GeocodeRegion,
    pub map_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let raw_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = raw_addr.parse().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let raw_workers = get("MAX_WORKERS", &DEFAULT_MAX_WORKERS.to_string());
        let max_workers = raw_workers
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::Invalid {
                name: "MAX_WORKERS",
                value: raw_workers.clone(),
            })?;

        let raw_dataset = get("DATASET_PATH", DEFAULT_DATASET_PATH);
        let dataset = DatasetSource::parse(&raw_dataset).map_err(|_| ConfigError::Invalid {
            name: "DATASET_PATH",
            value: raw_dataset.clone(),
        })?;

        let maps_api_key = lookup("GOOGLE_MAPS_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("GOOGLE_MAPS_API_KEY"))?;

        Ok(Config {
            bind_addr,
            max_workers,
            dataset,
            maps_api_key,
            region: GeocodeRegion {
                locality: get("GEOCODE_LOCALITY", DEFAULT_LOCALITY),
                country: get("GEOCODE_COUNTRY", DEFAULT_COUNTRY),
            },
            map_id: get("MAP_ID", DEFAULT_MAP_ID),
        })
    }
}
