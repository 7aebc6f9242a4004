//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file: `--config <FILE>`, else `$XDG_CONFIG_HOME/phdq/phdq.toml`
//! 3. Environment variables: `PHDQ_*` prefix (`PHDQ_HISTORIAN__REPLAY_FILE`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Historian backend selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistorianSettings {
    /// Replay file serving recorded responses; no backend when unset
    pub replay_file: Option<PathBuf>,
}

/// Unified configuration for phdq.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub historian: HistorianSettings,
}

/// Raw historian settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawHistorianSettings {
    replay_file: Option<String>,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct RawSettings {
    historian: RawHistorianSettings,
}

/// Get the XDG config directory for phdq.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "phdq").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("phdq.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like value.
fn expand_path(value: &str) -> Result<PathBuf, ApplicationError> {
    shellexpand::full(value)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ApplicationError::Config {
            message: format!("expand '{}': {}", value, e),
        })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Merge a settings file onto self. Relative paths resolve against `base_dir`.
    fn merge_with(&self, overlay: &RawSettings, base_dir: &Path) -> Result<Self, ApplicationError> {
        let replay_file = match &overlay.historian.replay_file {
            Some(raw) => {
                let path = expand_path(raw)?;
                Some(if path.is_relative() {
                    base_dir.join(path)
                } else {
                    path
                })
            }
            None => self.historian.replay_file.clone(),
        };
        Ok(Self {
            historian: HistorianSettings { replay_file },
        })
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit settings file; must exist. Replaces the global lookup.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Settings file
        let file = match config_file {
            Some(path) if !path.exists() => {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                })
            }
            Some(path) => Some(path.to_path_buf()),
            None => global_config_path().filter(|p| p.exists()),
        };
        if let Some(path) = file {
            debug!(path = %path.display(), "loading settings file");
            let raw = load_raw_settings(&path)?;
            let base_dir = path.parent().unwrap_or(Path::new("."));
            current = current.merge_with(&raw, base_dir)?;
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply PHDQ_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("PHDQ")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("historian.replay_file") {
            settings.historian.replay_file = Some(expand_path(&val)?);
        }

        Ok(settings)
    }

    /// Render settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
