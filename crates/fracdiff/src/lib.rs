//! Fixed-width window fractional differentiation (AFML chapter 5 style).
//!
//! A weight kernel approximating `(1 - B)^d` is truncated by window length and
//! by a minimum absolute weight, then slid across a single price series.

pub mod config;
pub mod differentiate;
pub mod error;
pub mod weights;

pub use config::FracDiffConfig;
pub use differentiate::{differentiate, differentiate_column};
pub use error::{FracDiffError, Result};
pub use weights::{compute_weights, weights_row};

/// Calculator boundary for fractional differentiation, so callers can swap
/// implementations behind `&dyn FracDiffer`.
pub trait FracDiffer {
    fn get_weights(&self, d: f64, window_size: usize, threshold: f64) -> Result<Vec<f64>>;

    fn differentiate(
        &self,
        d: f64,
        window_size: usize,
        threshold: f64,
        series: &[f64],
    ) -> Result<Vec<f64>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FracDiff;

impl FracDiffer for FracDiff {
    fn get_weights(&self, d: f64, window_size: usize, threshold: f64) -> Result<Vec<f64>> {
        compute_weights(d, window_size, threshold)
    }

    fn differentiate(
        &self,
        d: f64,
        window_size: usize,
        threshold: f64,
        series: &[f64],
    ) -> Result<Vec<f64>> {
        differentiate(d, window_size, threshold, series)
    }
}
