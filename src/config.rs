use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::store::StoreConfig;

const DEFAULT_DATABASE_NAME: &str = "plantarium";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// An optional `config.toml` (path overridable via `PLANTARIUM_CONFIG`)
    /// is merged with `PLANTARIUM_*` environment variables; the plain
    /// `DATABASE_URL`, `DATABASE_NAME` and `PORT` variables the service has
    /// always honoured are applied last as explicit overrides.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("PLANTARIUM_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PLANTARIUM")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if let Ok(url) = env::var("DATABASE_URL") {
            config.database.url = Some(url);
        }
        if let Ok(name) = env::var("DATABASE_NAME") {
            config.database.name = Some(name);
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse().context("invalid PORT")?;
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Resolve which store backend this process should run against.
    pub fn store_config(&self) -> StoreConfig {
        match self.database.url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => StoreConfig::Mongo {
                url: url.to_string(),
                database: self.database.database_name().to_string(),
            },
            None => StoreConfig::Seed,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseSection {
    pub fn database_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_url_selects_the_seed_fallback() {
        let config = AppConfig::default();
        assert!(matches!(config.store_config(), StoreConfig::Seed));
    }

    #[test]
    fn empty_url_selects_the_seed_fallback() {
        let mut config = AppConfig::default();
        config.database.url = Some(String::new());
        assert!(matches!(config.store_config(), StoreConfig::Seed));
    }

    #[test]
    fn configured_url_selects_mongo_with_default_name() {
        let mut config = AppConfig::default();
        config.database.url = Some("mongodb://localhost:27017".to_string());
        match config.store_config() {
            StoreConfig::Mongo { url, database } => {
                assert_eq!(url, "mongodb://localhost:27017");
                assert_eq!(database, DEFAULT_DATABASE_NAME);
            }
            StoreConfig::Seed => panic!("expected mongo store config"),
        }
    }
}
