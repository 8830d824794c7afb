use crate::function::dense::DensePolynomial;
use crate::function::traits::RealValuedFunction;

/// Computes a function `f` with `f(x[i]) == fx[i]` for every sample.
pub trait InterpolationAlgorithm {
    type Function: RealValuedFunction;

    /// `x` and `fx` are matched by index; only the first
    /// `min(x.len(), fx.len())` pairs are considered.
    fn interpolate(&self, x: &[f64], fx: &[f64]) -> Self::Function;
}

/// Interpolation whose result is a polynomial.
pub trait PolynomialInterpolation: InterpolationAlgorithm<Function = DensePolynomial> {
    fn interpolate_polynomial(&self, x: &[f64], fx: &[f64]) -> DensePolynomial;
}
