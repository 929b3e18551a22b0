// Rescue Search Configuration
// Matching thresholds, loadable from a JSON settings file

use crate::types::SearchError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default error threshold (0.0 = exact only, 1.0 = match anything)
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Default number of chars over which the offset penalty reaches 1.0
pub const DEFAULT_DISTANCE: usize = 100;

/// Matching configuration
///
/// Every field is optional in the JSON form; missing fields take their defaults.
///
/// ```json
/// { "threshold": 0.4, "limit": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum share of the query's chars that may be edited in a match
    pub threshold: f64,

    /// Offset (in chars) at which the start-position penalty reaches 1.0
    pub distance: usize,

    /// Normalized queries shorter than this (in chars) return nothing
    pub min_query_chars: usize,

    /// Maximum number of results, `None` for all
    pub limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            min_query_chars: 1,
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.distance == 0 {
            return Err(SearchError::InvalidConfig(
                "distance must be greater than 0".to_string(),
            ));
        }
        if self.min_query_chars == 0 {
            return Err(SearchError::InvalidConfig(
                "min_query_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the result limit
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
