//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Two entry points:
//! - [`NewtonInterpolation`] : stateless algorithm producing a
//!   [`DensePolynomial`] from raw samples. Total; duplicate `x` values
//!   propagate infinity/NaN into the result instead of failing.
//! - [`interpolate`]         : checked run over a validated [`NewtonCfg`],
//!   evaluating the interpolant at requested points.


use tracing::{debug, trace, warn};

use crate::function::dense::DensePolynomial;
use crate::function::traits::{Polynomial, RealValuedFunction};
use crate::interpolation::config::CommonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::{InterpolationAlgorithm, PolynomialInterpolation};


/// Newton divided-difference interpolation.
///
/// Zero-sized and stateless; share [`NewtonInterpolation::instance`] or
/// construct one freely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NewtonInterpolation;

static INSTANCE: NewtonInterpolation = NewtonInterpolation;

impl NewtonInterpolation {
    pub fn instance() -> &'static NewtonInterpolation {
        &INSTANCE
    }
}


/// Computes Newton divided-difference coefficients.
///
/// Returns a coefficient vector `c` s.t.
/// `P(x) = c[0] + c[1](x - x0) + ... + c[n-1](x - x0)...(x - x_{n-2})`,
/// with `n = min(x.len(), fx.len())`.
///
/// `c[i]` is the top entry `D[i][0]` of the triangular table
/// `D[i][j] = (D[i-1][j+1] - D[i-1][j]) / (x[j+i] - x[j])`, `D[0] = fx`.
/// The table is collapsed in place, order by order.
pub fn divided_differences(x: &[f64], fx: &[f64]) -> Vec<f64> {
    let n = x.len().min(fx.len());

    let mut c = fx[..n].to_vec();

    for order in 1..n {
        // after this pass c[i] = D[order][i - order] for i >= order
        for i in (order..n).rev() {
            c[i] = (c[i] - c[i - 1]) / (x[i] - x[i - order]);
        }
        trace!(order, coefficient = c[order], "divided difference");
    }

    c
}


impl PolynomialInterpolation for NewtonInterpolation {
    /// Accumulates `c[0] + sum_i c[i] * prod_{k<i} (x - x_k)`; each basis
    /// term extends the previous one by a degree-1 factor.
    fn interpolate_polynomial(&self, x: &[f64], fx: &[f64]) -> DensePolynomial {
        let n = x.len().min(fx.len());
        debug!(n, "newton interpolation");

        if n == 0 {
            return DensePolynomial::zero();
        }

        let c = divided_differences(x, fx);

        let mut result = DensePolynomial::constant(c[0]);
        let mut basis  = DensePolynomial::one();
        for i in 1..n {
            basis  = basis.multiply(&DensePolynomial::linear_factor(x[i - 1]));
            result = result.add(&basis.multiply_scalar(c[i]));
        }

        if !result.is_finite() {
            warn!(n, "interpolating polynomial has non-finite coefficients; sample positions are not distinct");
        }

        result
    }
}

impl InterpolationAlgorithm for NewtonInterpolation {
    type Function = DensePolynomial;

    fn interpolate(&self, x: &[f64], fx: &[f64]) -> DensePolynomial {
        self.interpolate_polynomial(x, fx)
    }
}


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then the checked setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two `x` samples;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}

impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common.with_x(v)?;
        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common.with_y(v)?;
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common.with_x_eval(v)?;
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        self.common.with_x_min_spacing(v)?;
        Ok(self)
    }

    pub fn common(&self) -> &CommonCfg<'a> {
        &self.common
    }
}


/// Performs checked Newton divided-difference interpolation.
///
/// # Behavior
/// - Validates the configuration (lengths, finiteness, distinct `x`).
/// - Builds the interpolant with [`NewtonInterpolation`].
/// - Evaluates it at each `xq` in `cfg.common.x_eval()` with Horner's
///   scheme on the canonical coefficients. The interpolant is a global
///   polynomial, so points outside the sampled range are extrapolated
///   exactly as [`RealValuedFunction::f`] would.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `polynomial`     : the interpolant
///
/// # Errors
/// - Any configuration error from [`CommonCfg::validate`].
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let polynomial = NewtonInterpolation::instance().interpolate_polynomial(x, y);

    let mut report = InterpolationReport::new(
        "newton",
        n_provided,
        n_evaluated,
        polynomial,
    );
    report.evaluated = report.polynomial.eval_many(evals);

    debug!(
        n_provided,
        n_evaluated,
        degree = report.polynomial.degree(),
        "newton interpolation report"
    );

    Ok(report)
}
