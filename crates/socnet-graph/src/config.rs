//! Build-time configuration.
//!
//! Only affects how nodes are placed; queries have no tunables.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Lower bound of the default coordinate range (per axis).
pub const DEFAULT_COORDINATE_MIN: f64 = 0.0;

/// Upper bound (exclusive) of the default coordinate range.
pub const DEFAULT_COORDINATE_MAX: f64 = 100.0;

/// Settings for [`GraphBuilder::from_config`](crate::GraphBuilder::from_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Inclusive lower bound for each coordinate axis.
    pub coordinate_min: f64,
    /// Exclusive upper bound for each coordinate axis.
    pub coordinate_max: f64,
    /// Seed for coordinate placement. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            coordinate_min: DEFAULT_COORDINATE_MIN,
            coordinate_max: DEFAULT_COORDINATE_MAX,
            seed: None,
        }
    }
}

impl GraphConfig {
    /// Parses a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: GraphConfig = serde_json::from_str(text)
            .map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects ranges `rand` cannot sample from.
    pub fn validate(&self) -> Result<()> {
        validate_range(&self.coordinate_range())
    }

    pub fn coordinate_range(&self) -> Range<f64> {
        self.coordinate_min..self.coordinate_max
    }
}

/// Checks that `range` is finite and non-empty.
pub(crate) fn validate_range(range: &Range<f64>) -> Result<()> {
    if !range.start.is_finite() || !range.end.is_finite() {
        return Err(GraphError::InvalidConfig(
            "coordinate bounds must be finite".to_string(),
        ));
    }
    if range.start >= range.end {
        return Err(GraphError::InvalidConfig(format!(
            "empty coordinate range {}..{}",
            range.start, range.end
        )));
    }
    Ok(())
}
