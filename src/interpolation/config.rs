//! Shared configuration for checked interpolation runs.
//!
//! Provides [`CommonCfg`] with default minimum allowed spacing between
//! any two `x` samples; [`DEFAULT_X_TOL`].
//!
//! [`CommonCfg`] — universal fields
//! - `x`             : x values provided
//! - `y`             : y values provided
//! - `x_eval`        : x values to evaluate
//! - `x_min_spacing` : samples closer than this count as duplicates
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.
//!
//! Samples need not be sorted, but must be pairwise distinct: a
//! divided-difference table divides by every `x[j + i] - x[j]`.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    /// Full check before a run. Setters check eagerly, but `set_x_tol`
    /// may tighten the spacing after `x` was accepted.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        check_distinct(x, self.x_min_spacing)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // checked setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        check_distinct(v, self.x_min_spacing)?;

        // length agreement check
        // symmetric with with_y
        let y_len = self.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
        }

        self.x = v;
        Ok(())
    }

    pub(crate) fn with_y(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        if v.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        let x_len = self.x.len();
        let y_len = v.len();
        if x_len != 0 && y_len != x_len {
            return Err(InterpolationError::UnequalLength { x_len, y_len });
        }

        self.y = v;
        Ok(())
    }

    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.x_eval = v;
        Ok(())
    }

    pub(crate) fn with_x_min_spacing(&mut self, v: f64) -> Result<(), InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }

        self.x_min_spacing = v;
        Ok(())
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Rejects any two samples closer than `min_spacing`, in any order.
pub(crate) fn check_distinct(xs: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);

    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]).abs() < min_spacing {
            return Err(InterpolationError::DuplicateX { x1: pair[0], x2: pair[1] });
        }
    }
    Ok(())
}
