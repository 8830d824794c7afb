//! Rejections raised while configuring a checked interpolation run.
//!
//! The raw [`crate::interpolation::NewtonInterpolation`] never returns
//! these; it lets degenerate samples propagate as NaN or infinity.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("sample count mismatch: {x_len} positions but {y_len} values")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("sample at index {idx} is NaN or infinite")]
    NonFiniteVec { idx: usize },

    #[error("no samples provided")]
    EmptyInput,

    #[error("{got} sample(s) cannot determine a non-constant interpolant, need at least 2")]
    InsufficientPoints { got: usize },

    /// Two positions closer than the configured spacing would divide a
    /// divided difference by (nearly) zero.
    #[error("sample positions {x1} and {x2} are not distinct")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("minimum sample spacing {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}
