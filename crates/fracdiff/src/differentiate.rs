//! Sliding-window application of the fractional differencing kernel.

use log::debug;
use nalgebra::DMatrix;

use crate::error::{FracDiffError, Result};
use crate::weights::compute_weights;

/// Fixed-width window fractional differentiation of `series`.
///
/// The output has the same length as the input. Position `i` holds the dot
/// product of the kernel with the `k` observations ending at `i`; the first
/// `k - 1` positions have no full window and stay `0.0`. A series shorter than
/// the kernel comes back all zeros rather than as an error.
pub fn differentiate(
    d: f64,
    window_size: usize,
    threshold: f64,
    series: &[f64],
) -> Result<Vec<f64>> {
    let weights = compute_weights(d, window_size, threshold)?;
    Ok(convolve(&weights, series))
}

/// [`differentiate`] over an `n x 1` column matrix, returning an `n x 1` column.
pub fn differentiate_column(
    d: f64,
    window_size: usize,
    threshold: f64,
    series: &DMatrix<f64>,
) -> Result<DMatrix<f64>> {
    // Parameter errors take precedence over shape errors.
    let weights = compute_weights(d, window_size, threshold)?;
    if series.ncols() != 1 {
        return Err(FracDiffError::NotSingleColumn { ncols: series.ncols() });
    }
    let out = convolve(&weights, series.as_slice());
    Ok(DMatrix::from_vec(out.len(), 1, out))
}

fn convolve(weights: &[f64], series: &[f64]) -> Vec<f64> {
    let n = series.len();
    let width = weights.len();
    let mut out = vec![0.0; n];
    if n < width {
        debug!("fracdiff series of length {n} shorter than kernel of length {width}");
        return out;
    }
    for (offset, window) in series.windows(width).enumerate() {
        out[offset + width - 1] = weights.iter().zip(window).map(|(w, x)| w * x).sum();
    }
    out
}
