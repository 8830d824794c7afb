//! Function contracts.
//!
//! - [`RealValuedFunction`] : anything evaluable at a real input
//! - [`Polynomial`]         : degree/coefficient introspection plus the
//!   algebra over polynomials
//!
//! Every algebraic operation produces a fresh [`DensePolynomial`]; the
//! binary operations accept any `&dyn Polynomial` and only read it through
//! [`Polynomial::degree`] and [`Polynomial::coefficient`].

use crate::function::dense::DensePolynomial;


pub trait RealValuedFunction {
    /// evaluates the function at `x`
    fn f(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.f(x)).collect()
    }
}

impl<F> RealValuedFunction for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn f(&self, x: f64) -> f64 {
        self(x)
    }
}


/// A univariate polynomial `c0 + c1 x + ... + cn x^n` over `f64`.
pub trait Polynomial: RealValuedFunction {
    /// Highest exponent with a non-zero coefficient, e.g. `deg(x^3 - 4.5 x^2) = 3`.
    /// The zero polynomial has degree 0.
    fn degree(&self) -> usize;

    /// Coefficient of the `x^degree` term, e.g. `-4.5` for `x^3 - 4.5 x^2`
    /// and degree 2. Terms above [`Polynomial::degree`] are 0.
    fn coefficient(&self, degree: usize) -> f64;

    /// Divides all coefficients by the leading one so that the
    /// coefficient of the highest term becomes exactly 1.
    fn normalize(&self) -> DensePolynomial;

    /// Multiplies every coefficient by `scalar`.
    fn multiply_scalar(&self, scalar: f64) -> DensePolynomial;

    /// Formal derivative, e.g. `d/dx (x^3 - 4.5 x^2) = 3 x^2 - 9 x`.
    fn differentiate(&self) -> DensePolynomial;

    fn add(&self, other: &dyn Polynomial) -> DensePolynomial;

    fn subtract(&self, other: &dyn Polynomial) -> DensePolynomial;

    fn multiply(&self, other: &dyn Polynomial) -> DensePolynomial;
}
