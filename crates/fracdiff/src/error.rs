use thiserror::Error;

/// Validation failures raised while building or applying a fractional differencing kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FracDiffError {
    #[error("d must be between 0 and 1 inclusive")]
    InvalidOrder,
    #[error("windowSize must be >= 1")]
    InvalidWindowSize,
    #[error("series matrix must have exactly one column (got {ncols})")]
    NotSingleColumn { ncols: usize },
    #[error("invalid fracdiff config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FracDiffError>;

pub(crate) fn validate_params(d: f64, window_size: usize) -> Result<()> {
    // NaN fails the range check as well.
    if !(0.0..=1.0).contains(&d) {
        return Err(FracDiffError::InvalidOrder);
    }
    if window_size < 1 {
        return Err(FracDiffError::InvalidWindowSize);
    }
    Ok(())
}
