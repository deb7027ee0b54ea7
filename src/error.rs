use thiserror::Error;

use crate::source::SourceError;

/// Errors raised while setting up the picker (config, sources, terminal IO)
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Suggestion source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
