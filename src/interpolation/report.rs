//! Defines the struct returned by checked interpolation runs.
//!
//! Defines the [`InterpolationReport`] struct returned by
//! [`crate::interpolation::newton::interpolate`].
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of data and evaluation points,
//! the interpolating polynomial and its values at the evaluation points.

use crate::function::dense::DensePolynomial;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"newton"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which the interpolant was evaluated
/// - `evaluated`      : interpolated values at each evaluation point
/// - `polynomial`     : the interpolant in canonical coefficient form
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
    pub polynomial: DensePolynomial,
}

impl InterpolationReport {
    pub fn new(
        algorithm_name: &'static str,
        n_provided: usize,
        n_evaluated: usize,
        polynomial: DensePolynomial,
    ) -> Self {
        Self {
            algorithm_name,
            n_provided,
            n_evaluated,
            evaluated: Vec::new(),
            polynomial,
        }
    }
}
