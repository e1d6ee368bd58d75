//! Binomial-series weights of the fractional difference operator `(1 - B)^d`.

use log::{debug, trace};
use nalgebra::DMatrix;

use crate::error::{validate_params, Result};

/// Fixed-width window weights, ordered oldest-to-newest so the kernel can be
/// dotted directly against a window of observations.
///
/// The raw expansion starts at `w[0] = 1` and follows
/// `w[k] = -w[k-1] * (d - k + 1) / k`. Generation stops after `window_size`
/// coefficients, or earlier at the first coefficient with `|w[k]| < threshold`,
/// which is not kept. A `threshold` of `0` never truncates. The returned kernel
/// always ends with `1.0`.
///
/// ```
/// let w = fracdiff::compute_weights(0.75, 5, 0.05).unwrap();
/// assert_eq!(w, vec![-0.09375, -0.75, 1.0]);
/// ```
pub fn compute_weights(d: f64, window_size: usize, threshold: f64) -> Result<Vec<f64>> {
    validate_params(d, window_size)?;

    let mut weights = Vec::with_capacity(window_size);
    weights.push(1.0);
    for k in 1..window_size {
        let next = weights[k - 1] * -1.0 * ((d - k as f64 + 1.0) / k as f64);
        if next.abs() < threshold {
            debug!(
                "fracdiff weights truncated at lag {k} of {window_size} (|{next:e}| < {threshold:e})"
            );
            break;
        }
        weights.push(next);
    }
    weights.reverse();

    trace!("fracdiff weights d={d} window_size={window_size} len={}", weights.len());
    Ok(weights)
}

/// [`compute_weights`] as a `1 x k` row matrix.
pub fn weights_row(d: f64, window_size: usize, threshold: f64) -> Result<DMatrix<f64>> {
    let weights = compute_weights(d, window_size, threshold)?;
    Ok(DMatrix::from_row_slice(1, weights.len(), &weights))
}
