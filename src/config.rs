//! Application-level configuration loading, including the weight category set.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "ZUGA_BACK_CONFIG_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    weights: Vec<String>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the baked-in weight set.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let app_config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        count = app_config.weights.len(),
                        "loaded weight categories from config"
                    );
                    app_config
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

    /// Weight category labels tables and spare players can be grouped under.
    pub fn weights(&self) -> &[String] {
        &self.weights
    }

    /// Whether `label` is one of the configured weight categories.
    pub fn is_known_weight(&self, label: &str) -> bool {
        self.weights.iter().any(|weight| weight == label)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weights: default_weights(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    weights: Vec<String>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            weights: value.weights,
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

/// Built-in weight set shipped with the binary.
fn default_weights() -> Vec<String> {
    [
        "Party",
        "Leggero (max 45 min)",
        "Medio (1-2h)",
        "Estremo (>2h)",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_set_has_four_categories() {
        let config = AppConfig::default();
        assert_eq!(config.weights().len(), 4);
        assert!(config.is_known_weight("Party"));
        assert!(config.is_known_weight("Estremo (>2h)"));
    }

    #[test]
    fn unknown_weight_is_rejected() {
        let config = AppConfig::default();
        assert!(!config.is_known_weight("party"));
        assert!(!config.is_known_weight(""));
    }
}
