use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TarotError;

/// Prefix for every environment override, e.g. `TAROT_DATABASE_URL`.
pub const ENV_PREFIX: &str = "TAROT_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// sqlx connection string; the file is created when missing.
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Optional JSON file replacing the built-in reference catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://tarot.db".to_string(),
            listen_addr: "0.0.0.0:9999".to_string(),
            loglevel: "info".to_string(),
            catalog_path: None,
        }
    }
}

impl Config {
    /// Defaults overlaid with `TAROT_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_env() -> Result<Self, TarotError> {
        Ok(Self::figment().extract()?)
    }
}
