use serde::{Deserialize, Serialize};

use crate::differentiate::differentiate;
use crate::error::{validate_params, FracDiffError, Result};
use crate::weights::compute_weights;

/// Parameter bundle for fixed-width window fractional differentiation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FracDiffConfig {
    pub d: f64,
    pub window_size: usize,
    pub threshold: f64,
}

impl Default for FracDiffConfig {
    fn default() -> Self {
        Self { d: 0.5, window_size: 100, threshold: 1e-5 }
    }
}

impl FracDiffConfig {
    pub fn new(d: f64, window_size: usize, threshold: f64) -> Self {
        Self { d, window_size, threshold }
    }

    /// Parses a JSON object; absent fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|err| FracDiffError::Config(err.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        validate_params(self.d, self.window_size)
    }

    pub fn weights(&self) -> Result<Vec<f64>> {
        compute_weights(self.d, self.window_size, self.threshold)
    }

    pub fn apply(&self, series: &[f64]) -> Result<Vec<f64>> {
        differentiate(self.d, self.window_size, self.threshold, series)
    }
}
