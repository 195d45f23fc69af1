//! Caching strategy selection by URL pattern.

use crate::error::{CampusError, Result};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// How a request is resolved between cache and network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Serve from cache; go to the network only on a miss.
    CacheFirst,
    /// Go to the network; fall back to cache when it fails.
    NetworkFirst,
    /// Serve from cache at once and refresh it in the background.
    StaleWhileRevalidate,
}

/// Pattern groups checked in priority order.
const DEFAULT_PATTERNS: &[(Strategy, &[&str])] = &[
    (
        Strategy::CacheFirst,
        &[r"\.(?:css|js|woff2?|ttf|eot)$", r"/icons/", r"/images/"],
    ),
    (Strategy::NetworkFirst, &[r"/api/", r"/courses/", r"/admin/"]),
    (Strategy::StaleWhileRevalidate, &[r"/$", r"\.html$"]),
];

static DEFAULT_TABLE: LazyLock<StrategyTable> =
    LazyLock::new(|| StrategyTable::from_patterns(DEFAULT_PATTERNS).unwrap());

/// Ordered `(strategy, patterns)` groups. The first group with a matching pattern
/// decides; URLs matching nothing use the fallback strategy.
#[derive(Debug, Clone)]
pub struct StrategyTable {
    groups: Vec<(Strategy, Vec<Regex>)>,
    fallback: Strategy,
}

impl StrategyTable {
    /// Compile pattern groups. Groups keep the order given.
    pub fn from_patterns(groups: &[(Strategy, &[&str])]) -> Result<Self> {
        let groups = groups
            .iter()
            .map(|(strategy, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| {
                        Regex::new(p).map_err(|e| {
                            CampusError::Other(format!("Invalid cache pattern {}: {}", p, e))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok((*strategy, compiled))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            groups,
            fallback: Strategy::NetworkFirst,
        })
    }

    pub fn with_fallback(mut self, fallback: Strategy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Pick the strategy for a full request URL.
    pub fn classify(&self, url: &str) -> Strategy {
        self.groups
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(url)))
            .map(|(strategy, _)| *strategy)
            .unwrap_or(self.fallback)
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}
