//! Runtime configuration.
//!
//! Everything has a default; the environment can override:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CATALOG_RECENT_CAPACITY` | [`CatalogConfig::recent_capacity`] | 5 |
//! | `CATALOG_BUFFER_SIZE` | [`CatalogConfig::buffer_size`] | 32 |
//! | `CATALOG_SEED_ITEMS` | [`CatalogConfig::seed_items`] | true |
//!
//! Log verbosity is controlled separately through `RUST_LOG`
//! (see [`setup_tracing`](crate::lifecycle::setup_tracing)).

use std::num::NonZeroUsize;

use thiserror::Error;
use tracing::info;

use crate::history::DEFAULT_RECENT_CAPACITY;

pub const RECENT_CAPACITY_VAR: &str = "CATALOG_RECENT_CAPACITY";
pub const BUFFER_SIZE_VAR: &str = "CATALOG_BUFFER_SIZE";
pub const SEED_ITEMS_VAR: &str = "CATALOG_SEED_ITEMS";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    NotPositive { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    NotBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// How many accepted items the recent-items ring keeps.
    pub recent_capacity: NonZeroUsize,
    /// Request queue depth in front of the catalog actor.
    pub buffer_size: usize,
    /// Start the in-memory store with the demo catalog.
    pub seed_items: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            buffer_size: 32,
            seed_items: true,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|var| std::env::var(var).ok())?;
        info!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(RECENT_CAPACITY_VAR) {
            config.recent_capacity = parse_positive(RECENT_CAPACITY_VAR, &value)?;
        }
        if let Some(value) = lookup(BUFFER_SIZE_VAR) {
            config.buffer_size = parse_positive(BUFFER_SIZE_VAR, &value)?.get();
        }
        if let Some(value) = lookup(SEED_ITEMS_VAR) {
            config.seed_items = parse_bool(SEED_ITEMS_VAR, &value)?;
        }
        Ok(config)
    }
}

fn parse_positive(var: &'static str, value: &str) -> Result<NonZeroUsize, ConfigError> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::NotPositive {
            var,
            value: value.to_string(),
        })
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::NotBool {
            var,
            value: value.to_string(),
        }),
    }
}
