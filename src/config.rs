//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treedash/treedash.toml`
//! 3. Environment variables: `TREEDASH_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_FALLBACK_ABSORPTION_TONNES;

/// Unified configuration for treedash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Number of records the synthetic source generates (default: 100)
    pub sample_size: usize,
    /// Fixed generator seed; unset means a fresh inventory per run
    pub seed: Option<u64>,
    /// Average absorption (tonnes/year/tree) assumed when the filtered set
    /// is empty (default: 0.04, matching the original dashboard)
    pub fallback_absorption_tonnes: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_size: 100,
            seed: None,
            fallback_absorption_tonnes: DEFAULT_FALLBACK_ABSORPTION_TONNES,
        }
    }
}

/// Raw settings for intermediate parsing (all fields Option to detect
/// "not specified" in the global config file).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    sample_size: Option<usize>,
    seed: Option<u64>,
    fallback_absorption_tonnes: Option<f64>,
}

/// Get the XDG config directory for treedash.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treedash").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treedash.toml"))
}

fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Apply file values onto self; unspecified fields keep the base value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            sample_size: overlay.sample_size.unwrap_or(self.sample_size),
            seed: overlay.seed.or(self.seed),
            fallback_absorption_tonnes: overlay
                .fallback_absorption_tonnes
                .unwrap_or(self.fallback_absorption_tonnes),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/treedash/treedash.toml`
    /// 3. Environment variables: `TREEDASH_*` prefix (explicit override)
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply TREEDASH_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("TREEDASH").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get::<usize>("sample_size") {
            settings.sample_size = val;
        }
        if let Ok(val) = config.get::<u64>("seed") {
            settings.seed = Some(val);
        }
        if let Ok(val) = config.get::<f64>("fallback_absorption_tonnes") {
            settings.fallback_absorption_tonnes = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treedash configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treedash/treedash.toml
#   Env:    TREEDASH_* environment variables (explicit overrides)

# Number of records the synthetic source generates
# sample_size = 100

# Fixed generator seed for reproducible inventories
# seed = 42

# Average absorption (tonnes/year/tree) assumed when no records match
# fallback_absorption_tonnes = 0.04
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
