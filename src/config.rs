use thiserror::Error;

use crate::player::{CatalogError, TrackCatalog, catalog::DEFAULT_TRACKS};

pub const TRACKS_ENV: &str = "STATEPLAYER_TRACKS";
pub const TICK_ENV: &str = "STATEPLAYER_TICK_MS";
pub const LOG_CAPACITY_ENV: &str = "STATEPLAYER_LOG_CAPACITY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tracks: Vec<String>,
    pub tick_rate_ms: u64,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracks: DEFAULT_TRACKS.iter().map(|t| t.to_string()).collect(),
            tick_rate_ms: 250,
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    /// Reads overrides from the process environment. Call `dotenv` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TRACKS_ENV) {
            let tracks: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            // Validate up front so a bad list fails at startup.
            TrackCatalog::new(tracks.clone())?;
            config.tracks = tracks;
        }

        if let Some(raw) = lookup(TICK_ENV) {
            config.tick_rate_ms = parse_number(TICK_ENV, &raw)?;
            if config.tick_rate_ms == 0 {
                return Err(ConfigError::Zero(TICK_ENV));
            }
        }

        if let Some(raw) = lookup(LOG_CAPACITY_ENV) {
            config.log_capacity = parse_number(LOG_CAPACITY_ENV, &raw)?;
        }

        Ok(config)
    }

    pub fn catalog(&self) -> Result<TrackCatalog, ConfigError> {
        Ok(TrackCatalog::new(self.tracks.clone())?)
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}
