use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::checks::CheckKind;
use crate::error::{AccError, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const CENTRAL_CONFIG_RELATIVE: &str = ".config/acc/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub checks: ChecksConfig,
}

/// Settings for retrieving remote documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Check names as accepted by `CheckKind::from_str`
    pub enabled: Vec<String>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            enabled: CheckKind::all().iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, the central config file, or
    /// defaults, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| AccError::config(e.to_string()))
    }

    /// `$HOME/.config/acc/config.toml`, when `HOME` is set.
    pub fn central_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(CENTRAL_CONFIG_RELATIVE))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fetch.timeout.is_zero() {
            return Err(AccError::config("fetch timeout must be greater than zero"));
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AccError::config("fetch user_agent must not be empty"));
        }
        if self.checks.enabled.is_empty() {
            return Err(AccError::config(
                "checks.enabled must name at least one check",
            ));
        }
        self.enabled_checks().map(|_| ())
    }

    /// Enabled checks in invocation order, without duplicates.
    pub fn enabled_checks(&self) -> Result<Vec<CheckKind>> {
        let requested = self
            .checks
            .enabled
            .iter()
            .map(|name| name.parse::<CheckKind>())
            .collect::<Result<Vec<_>>>()?;
        Ok(CheckKind::all()
            .into_iter()
            .filter(|kind| requested.contains(kind))
            .collect())
    }
}
