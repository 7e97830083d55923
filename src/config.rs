//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/evochain/evochain.toml` (or `--config`)
//! 3. Environment variables: `EVOCHAIN_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Public PokeAPI endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Unified configuration for evochain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the species-data provider
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent sent with every request
    pub user_agent: String,
    /// Fetch artwork and categories for every species (one request each)
    pub fetch_cards: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 10,
            user_agent: format!("evochain/{}", env!("CARGO_PKG_VERSION")),
            fetch_cards: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub fetch_cards: Option<bool>,
}

/// Get the XDG config directory for evochain.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "evochain").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("evochain.toml"))
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

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            api_base_url: overlay
                .api_base_url
                .clone()
                .unwrap_or_else(|| self.api_base_url.clone()),
            timeout_secs: overlay.timeout_secs.unwrap_or(self.timeout_secs),
            user_agent: overlay
                .user_agent
                .clone()
                .unwrap_or_else(|| self.user_agent.clone()),
            fetch_cards: overlay.fetch_cards.unwrap_or(self.fetch_cards),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist. When `None` the global
    ///   config is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        let raw = load_raw_settings(&global_path)?;
                        current = current.merge_with(&raw);
                    }
                }
            }
        }

        // 3. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.normalize();
        current.validate()?;
        Ok(current)
    }

    /// Apply EVOCHAIN_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("EVOCHAIN")
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(&config, "api_base_url")? {
            settings.api_base_url = val;
        }
        if let Some(val) = env_value(&config, "timeout_secs")? {
            settings.timeout_secs = val;
        }
        if let Some(val) = env_value(&config, "user_agent")? {
            settings.user_agent = val;
        }
        if let Some(val) = env_value(&config, "fetch_cards")? {
            settings.fetch_cards = val;
        }

        Ok(settings)
    }

    /// Override the provider endpoint (command line flag).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = trimmed.to_string();
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.api_base_url.is_empty() {
            return Err(ApplicationError::Config {
                message: "api_base_url must not be empty".to_string(),
            });
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ApplicationError::Config {
                message: format!("api_base_url is not an http(s) URL: {}", self.api_base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ApplicationError::Config {
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        format!(
            r#"# evochain configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/evochain/evochain.toml (or --config FILE)
#   Env:  EVOCHAIN_* environment variables, e.g. EVOCHAIN_TIMEOUT_SECS=30
#   Flag: --api-url

# Base URL of the species-data provider
# api_base_url = "{DEFAULT_API_BASE_URL}"

# Per-request timeout in seconds
# timeout_secs = 10

# User agent sent with every request
# user_agent = "evochain"

# Fetch artwork and categories for every species
# fetch_cards = true
"#
        )
    }
}

/// A set but unparsable variable is an error, not a silent fallback.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("EVOCHAIN_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
