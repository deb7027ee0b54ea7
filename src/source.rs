//! Suggestion sources
//!
//! A source turns a query into an ordered list of suggestions. Sources run
//! asynchronously on the ambient runtime and must observe the cancellation
//! token they are handed, failing with [`SourceError::Cancelled`] once it fires.

use futures::future::BoxFuture;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::{SourceConfig, SourceKind};
use crate::error::TypeaheadError;

mod city;
mod http;

pub use city::{CitySource, DEFAULT_CITIES, MatchMode, filter_cities};
pub use http::HttpSource;

/// Errors a suggestion source can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The request was superseded; never surfaced to the user
    #[error("Request cancelled")]
    Cancelled,

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// The source answered with something that is not a suggestion list
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Any other failure
    #[error("Source failed: {0}")]
    Failed(String),
}

impl SourceError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SourceError::Cancelled)
    }
}

/// Result of a single search
pub type SearchResult = Result<Vec<String>, SourceError>;

/// Asynchronous provider of suggestions
///
/// The returned future owns everything it needs so it can be spawned; order of
/// the returned suggestions is preserved by callers.
pub trait SuggestionSource: Send + Sync {
    fn search(&self, query: &str, cancel: CancellationToken) -> BoxFuture<'static, SearchResult>;
}

/// Build the configured source
pub fn from_config(config: &SourceConfig) -> Result<Box<dyn SuggestionSource>, TypeaheadError> {
    match config.kind {
        SourceKind::Cities => {
            let source = match &config.cities_file {
                Some(path) => CitySource::from_file(path)?,
                None => CitySource::new(DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()),
            };
            Ok(Box::new(
                source
                    .with_latency(config.latency())
                    .with_match_mode(config.match_mode),
            ))
        }
        SourceKind::Http => {
            let url = config
                .url
                .as_deref()
                .filter(|u| !u.trim().is_empty())
                .ok_or_else(|| {
                    TypeaheadError::Config("url is required for kind = \"http\"".to_string())
                })?;
            Ok(Box::new(HttpSource::new(url, &config.query_param)?))
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
