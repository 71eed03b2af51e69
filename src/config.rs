//! Runtime configuration.
//!
//! Built-in defaults, then an optional JSON file named by `AGENCY_CONFIG`, then
//! individual `AGENCY_*` environment overrides. Call `dotenv::dotenv()` first
//! if a `.env` file should contribute.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::error::{AgencyError, AgencyResult};
use crate::orchestrator::DEFAULT_SCENARIO;

pub const CONFIG_PATH_VAR: &str = "AGENCY_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgencyConfig {
    pub host: String,
    pub port: u16,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    pub default_scenario: String,
}

impl Default for AgencyConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            log_filter: "realtime_agency=info".to_string(),
            default_scenario: DEFAULT_SCENARIO.to_string(),
        }
    }
}

impl AgencyConfig {
    /// Defaults, file and process environment, in that order
    pub async fn load() -> AgencyResult<Self> {
        let base = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim()).await?,
            _ => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a JSON config file; missing keys keep their defaults
    pub async fn from_file(path: impl AsRef<Path>) -> AgencyResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        serde_json::from_str(&content)
            .map_err(|e| AgencyError::Config(format!("{}: {}", path.display(), e)))
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> AgencyResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Apply `AGENCY_HOST`, `AGENCY_PORT`, `AGENCY_DEFAULT_SCENARIO` and `AGENCY_LOG`
    pub fn with_overrides<F>(mut self, lookup: F) -> AgencyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("AGENCY_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("AGENCY_PORT") {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| AgencyError::Config(format!("AGENCY_PORT is not a valid port: '{}'", port)))?;
        }
        if let Some(key) = lookup("AGENCY_DEFAULT_SCENARIO") {
            self.default_scenario = key;
        }
        if let Some(filter) = lookup("AGENCY_LOG") {
            self.log_filter = filter;
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
