//! Command-line arguments
//!
//! Flags override the matching values from the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SourceKind};
use crate::source::MatchMode;

#[derive(Parser, Debug, Default)]
#[command(version, about = "Search-as-you-type suggestion picker")]
pub struct Args {
    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum trimmed query length before searching (negative means 0)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub min_length: Option<i64>,

    /// Quiet period after the last keystroke before searching
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Simulated latency of the built-in city source
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// How the built-in city source matches queries
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,

    /// Newline-separated list of names replacing the built-in cities
    #[arg(long, value_name = "PATH")]
    pub cities_file: Option<PathBuf>,

    /// Fetch suggestions from this HTTP endpoint instead
    #[arg(long)]
    pub url: Option<String>,

    /// Query parameter carrying the search text for --url
    #[arg(long, value_name = "NAME")]
    pub query_param: Option<String>,

    /// Placeholder shown in the empty input field
    #[arg(long)]
    pub placeholder: Option<String>,
}

impl Args {
    /// Overlay the flags that were given onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(min_length) = self.min_length {
            config.widget.min_query_length = min_length;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.widget.debounce_ms = debounce_ms;
        }
        if let Some(placeholder) = &self.placeholder {
            config.widget.placeholder = placeholder.clone();
        }
        if let Some(latency_ms) = self.latency_ms {
            config.source.latency_ms = latency_ms;
        }
        if let Some(match_mode) = self.match_mode {
            config.source.match_mode = match_mode;
        }
        if let Some(cities_file) = &self.cities_file {
            config.source.cities_file = Some(cities_file.clone());
        }
        if let Some(url) = &self.url {
            config.source.kind = SourceKind::Http;
            config.source.url = Some(url.clone());
        }
        if let Some(query_param) = &self.query_param {
            config.source.query_param = query_param.clone();
        }
    }
}
