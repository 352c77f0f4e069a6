use std::env;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::configs::normalize_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub migration_path: Option<String>,
    pub clean_start: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Self::load("configs", &run_mode)
    }

    /// Layer `<dir>/default`, then `<dir>/<run_mode>`, then `ROOMDESK__*` variables.
    pub fn load(dir: &str, run_mode: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(&format!("{dir}/default")))
            .add_source(File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("ROOMDESK").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(migrate) = &settings.database.migration_path {
            if Path::new(migrate).is_dir() {
                let migrate_path = normalize_path(migrate)
                    .map_err(|e| ConfigError::Message(e.to_string()))?
                    .to_string_lossy()
                    .to_string();

                settings.database.migration_path = Some(migrate_path);
            } else {
                tracing::debug!("migration path {} not found, skipping migrations", migrate);
                settings.database.migration_path = None;
            }
        }

        Ok(settings)
    }

    /// Default filter directive for the subscriber when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> String {
        let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
        let level = self.logger.level.as_str();

        format!("{app_name}={level},tower_http={level}")
    }
}
