//! Solver configuration
//!
//! The reducer and the rank analysis use two different thresholds. The pivot
//! threshold is compared against raw coefficients while they are being
//! eliminated; the consistency threshold is compared against right-hand side
//! residuals left after full reduction, which should be close to machine
//! epsilon when the system is consistent.

use crate::error::{GaussError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default magnitude below which a pivot candidate is treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-10;

/// Default magnitude at or above which a leftover right-hand side entry
/// makes the system inconsistent.
pub const DEFAULT_CONSISTENCY_TOLERANCE: f64 = 1e-15;

/// Tolerances used by [`crate::solve_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussConfig {
    /// Pivots with a smaller magnitude mark their column as free
    pub pivot_tolerance: f64,
    /// Residuals with a magnitude at least this large mean "no solution"
    pub consistency_tolerance: f64,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
            consistency_tolerance: DEFAULT_CONSISTENCY_TOLERANCE,
        }
    }
}

impl GaussConfig {
    /// Check that both tolerances are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        check_tolerance("pivot_tolerance", self.pivot_tolerance)?;
        check_tolerance("consistency_tolerance", self.consistency_tolerance)
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_json(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(content: &str) -> std::result::Result<Self, String> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| format!("Failed to parse JSON: {}", e))?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GaussError::InvalidTolerance { name, value })
    }
}

/// Builder for [`GaussConfig`].
#[derive(Debug, Clone)]
pub struct GaussConfigBuilder {
    cfg: GaussConfig,
}

impl Default for GaussConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GaussConfigBuilder {
    /// Creates a new builder with default tolerances.
    pub fn new() -> Self {
        Self {
            cfg: GaussConfig::default(),
        }
    }
    /// Sets the pivot significance threshold.
    pub fn pivot_tolerance(mut self, v: f64) -> Self {
        self.cfg.pivot_tolerance = v;
        self
    }
    /// Sets the consistency threshold.
    pub fn consistency_tolerance(mut self, v: f64) -> Self {
        self.cfg.consistency_tolerance = v;
        self
    }
    /// Validates and returns the configuration.
    pub fn build(self) -> Result<GaussConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
