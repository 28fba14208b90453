//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

/// Tracing filter used when neither `RUST_LOG` nor `LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "cellars_and_centaurs=debug";

/// Where creature records are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    Memory,
    /// JSON file at the given path
    JsonFile(PathBuf),
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Creature storage backend (`CREATURE_STORE`, `CREATURE_STORE_PATH`)
    pub store: StoreBackend,
    /// Tracing filter directive (`LOG_FILTER`)
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store = match lookup("CREATURE_STORE")
            .unwrap_or_else(|| "memory".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "json" => StoreBackend::JsonFile(
                lookup("CREATURE_STORE_PATH")
                    .unwrap_or_else(|| "data/creatures.json".to_string())
                    .into(),
            ),
            other => bail!("CREATURE_STORE must be 'memory' or 'json', got '{}'", other),
        };

        Ok(Self {
            store,
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}
