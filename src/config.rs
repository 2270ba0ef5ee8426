//! Application-level configuration loading, including deployment alias overrides.

use std::{collections::HashMap, env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the engine looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/flagquiz.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "FLAGQUIZ_CONFIG_PATH";
/// Default stats file used when the configuration does not name one.
const DEFAULT_STATS_PATH: &str = "flagquiz-stats.json";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the engine.
pub struct AppConfig {
    /// Path of the persisted stats document.
    pub stats_path: PathBuf,
    /// Extra colloquial spellings mapped to ISO codes, merged on top of the
    /// built-in alias table.
    pub aliases: HashMap<String, String>,
}

impl AppConfig {
    /// Load the configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        aliases = config.aliases.len(),
                        "loaded flag quiz configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stats_path: PathBuf::from(DEFAULT_STATS_PATH),
            aliases: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    stats_path: Option<String>,
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            stats_path: value
                .stats_path
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATS_PATH)),
            aliases: value.aliases,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_defaults_apply() {
        let raw: RawConfig = serde_json::from_str("{}").unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.stats_path, PathBuf::from(DEFAULT_STATS_PATH));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn raw_config_carries_aliases() {
        let raw: RawConfig = serde_json::from_str(
            r#"{"stats_path": "/var/lib/bot/flags.json", "aliases": {"doichland": "DE"}}"#,
        )
        .unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.stats_path, PathBuf::from("/var/lib/bot/flags.json"));
        assert_eq!(config.aliases.get("doichland").map(String::as_str), Some("DE"));
    }
}
