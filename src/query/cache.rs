//! Per-query suggestion cache
//!
//! Keys are trimmed queries, compared case-sensitively. Unbounded by default;
//! with a capacity the least recently used entry is evicted when an insert
//! would exceed it.

use std::collections::HashMap;

#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<String>,
    last_used: u64,
}

/// Cache of resolved suggestion lists keyed by query
#[derive(Debug, Clone, Default)]
pub struct SuggestionCache {
    entries: HashMap<String, CacheEntry>,
    capacity: Option<usize>,
    clock: u64,
}

impl SuggestionCache {
    /// Unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// LRU cache holding at most `capacity` queries (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.max(1)),
            capacity: Some(capacity.max(1)),
            clock: 0,
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Look up a query, marking it as recently used
    pub fn get(&mut self, query: &str) -> Option<Vec<String>> {
        self.clock += 1;
        let clock = self.clock;
        self.entries.get_mut(query).map(|entry| {
            entry.last_used = clock;
            entry.results.clone()
        })
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.contains_key(query)
    }

    pub fn insert(&mut self, query: String, results: Vec<String>) {
        self.clock += 1;

        if let Some(capacity) = self.capacity
            && !self.entries.contains_key(&query)
            && self.entries.len() >= capacity
        {
            self.evict_least_recently_used();
        }

        self.entries.insert(
            query,
            CacheEntry {
                results,
                last_used: self.clock,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_least_recently_used(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(query, _)| query.clone());

        if let Some(query) = oldest {
            log::debug!("Evicting cached suggestions for {:?}", query);
            self.entries.remove(&query);
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
