// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::source::MatchMode;

pub const DEFAULT_PLACEHOLDER: &str = "Search for a city...";
pub const DEFAULT_MIN_QUERY_LENGTH: i64 = 1;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_LATENCY_MS: u64 = 250;

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_min_query_length() -> i64 {
    DEFAULT_MIN_QUERY_LENGTH
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_query_param() -> String {
    "q".to_string()
}

/// Widget behaviour section
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Signed so that negative values parse and can be clamped
    #[serde(default = "default_min_query_length")]
    pub min_query_length: i64,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Absent means the cache is unbounded
    #[serde(default)]
    pub cache_capacity: Option<usize>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            placeholder: default_placeholder(),
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            cache_capacity: None,
        }
    }
}

impl WidgetConfig {
    /// Minimum query length with negative values clamped to 0
    pub fn min_query_length(&self) -> usize {
        usize::try_from(self.min_query_length.max(0)).unwrap_or(usize::MAX)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Suggestion source selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Cities,
    Http,
}

/// Suggestion source section
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub cities_file: Option<PathBuf>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: SourceKind::Cities,
            latency_ms: DEFAULT_LATENCY_MS,
            match_mode: MatchMode::Prefix,
            cities_file: None,
            url: None,
            query_param: default_query_param(),
        }
    }
}

impl SourceConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub source: SourceConfig,
}
