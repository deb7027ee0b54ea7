//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory. A missing file
//! silently yields defaults; an unreadable or invalid one yields defaults plus
//! a warning for the host to display.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_DEBOUNCE_MS, DEFAULT_LATENCY_MS, DEFAULT_MIN_QUERY_LENGTH,
    DEFAULT_PLACEHOLDER, SourceConfig, SourceKind, WidgetConfig,
};

/// Outcome of loading the config file
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location: `<config dir>/typeahead/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load config from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load config from an explicit path
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("Failed to read config {}: {}", path.display(), e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config file: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&content) {
        Ok(config) => {
            if config.widget.min_query_length < 0 {
                log::debug!(
                    "min_query_length {} clamped to 0",
                    config.widget.min_query_length
                );
            }
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::warn!("Invalid config {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config file, using defaults: {}", e.message())),
            }
        }
    }
}
