//! # Configuration
//!
//! Where the stores live and how deep the registry queues are. Every field has a
//! default, so an empty JSON object is a valid configuration file:
//!
//! ```json
//! {
//!     "data_dir": "/var/lib/hotel",
//!     "channel_capacity": 64
//! }
//! ```

use record_actor::RecordStore;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides [`SystemConfig::data_dir`] in [`SystemConfig::from_env`].
pub const DATA_DIR_ENV: &str = "HOTEL_DATA_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("channel_capacity must be at least 1")]
    ZeroCapacity,
}

/// Settings for a [`ReservationSystem`](crate::lifecycle::ReservationSystem).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Directory holding the three stores.
    pub data_dir: PathBuf,
    pub customers_store: String,
    pub hotels_store: String,
    pub reservations_store: String,
    /// Requests each registry queues before callers wait.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            customers_store: "customers.json".to_string(),
            hotels_store: "hotels.json".to_string(),
            reservations_store: "reservations.json".to_string(),
            channel_capacity: 32,
        }
    }
}

impl SystemConfig {
    /// Default store names under `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Defaults, with `data_dir` taken from `HOTEL_DATA_DIR` when it is set.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::in_dir(dir),
            _ => Self::default(),
        }
    }

    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// The record store rooted at `data_dir`.
    pub fn records(&self) -> RecordStore {
        RecordStore::new(&self.data_dir)
    }
}
