//! Configuration management for bookshelf

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::services::loans::DEFAULT_LOAN_DAYS;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path of the JSON snapshot file.
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoansConfig {
    /// Loan period in days when a borrow does not specify one.
    pub default_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub loans: LoansConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BOOKSHELF_)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override catalog path from CATALOG_PATH env var if present
            .set_override_option("catalog.path", env::var("CATALOG_PATH").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog.json"),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_LOAN_DAYS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
