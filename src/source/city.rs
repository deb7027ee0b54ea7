//! Built-in city name source
//!
//! Filters a fixed list of city names after a simulated latency. The list
//! order is the result order for prefix matching; fuzzy matching ranks by
//! score and falls back to list order on ties.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::{SearchResult, SourceError, SuggestionSource};

pub const DEFAULT_CITIES: &[&str] = &[
    "Amsterdam",
    "Athens",
    "Auckland",
    "Boston",
    "Bogotá",
    "Buenos Aires",
    "Bangalore",
    "Berlin",
    "Barcelona",
    "Beijing",
    "Brisbane",
    "Cairo",
    "Cape Town",
    "Chicago",
    "Copenhagen",
    "Delhi",
    "Dubai",
    "Dublin",
    "Edinburgh",
    "Florence",
    "Frankfurt",
    "Geneva",
    "Hamburg",
    "Helsinki",
    "Hong Kong",
    "Istanbul",
    "Jakarta",
    "Johannesburg",
    "Kyoto",
    "Lagos",
    "Lima",
    "Lisbon",
    "London",
    "Los Angeles",
    "Madrid",
    "Melbourne",
    "Mexico City",
    "Milan",
    "Montreal",
    "Moscow",
    "Mumbai",
    "Nairobi",
    "New York",
    "Oslo",
    "Paris",
    "Prague",
    "Rio de Janeiro",
    "Rome",
    "San Francisco",
    "Santiago",
    "Seoul",
    "Singapore",
    "Stockholm",
    "Sydney",
    "Tokyo",
    "Toronto",
    "Vancouver",
    "Vienna",
    "Warsaw",
    "Zurich",
];

/// How a query is matched against city names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive prefix match, list order
    #[default]
    Prefix,
    /// Skim-style fuzzy match, best score first
    Fuzzy,
}

/// Suggestion source backed by an in-memory list of city names
#[derive(Debug, Clone)]
pub struct CitySource {
    cities: Arc<Vec<String>>,
    latency: Duration,
    match_mode: MatchMode,
}

impl CitySource {
    pub fn new(cities: Vec<String>) -> Self {
        Self {
            cities: Arc::new(cities),
            latency: Duration::ZERO,
            match_mode: MatchMode::Prefix,
        }
    }

    /// Load one city per line, skipping blank lines and `#` comments
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let cities = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect::<Vec<_>>();
        log::debug!("Loaded {} cities from {}", cities.len(), path.display());
        Ok(Self::new(cities))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl SuggestionSource for CitySource {
    fn search(&self, query: &str, cancel: CancellationToken) -> BoxFuture<'static, SearchResult> {
        let cities = Arc::clone(&self.cities);
        let latency = self.latency;
        let match_mode = self.match_mode;
        let query = query.to_string();

        async move {
            if !latency.is_zero() {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(SourceError::Cancelled),
                    _ = tokio::time::sleep(latency) => {}
                }
            }
            if cancel.is_cancelled() {
                return Err(SourceError::Cancelled);
            }
            Ok(filter_cities(&cities, &query, match_mode))
        }
        .boxed()
    }
}

/// Match `query` against `cities`
pub fn filter_cities(cities: &[String], query: &str, match_mode: MatchMode) -> Vec<String> {
    match match_mode {
        MatchMode::Prefix => {
            let needle = query.to_lowercase();
            cities
                .iter()
                .filter(|city| city.to_lowercase().starts_with(&needle))
                .cloned()
                .collect()
        }
        MatchMode::Fuzzy => {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, usize)> = cities
                .iter()
                .enumerate()
                .filter_map(|(i, city)| matcher.fuzzy_match(city, query).map(|score| (score, i)))
                .collect();
            // Stable sort keeps list order among equal scores
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            scored.into_iter().map(|(_, i)| cities[i].clone()).collect()
        }
    }
}

#[cfg(test)]
#[path = "city_tests.rs"]
mod city_tests;
