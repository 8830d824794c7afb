//! Univariate real polynomials and polynomial interpolation.
//!
//! - [`function`]      : the [`RealValuedFunction`] / [`Polynomial`] contracts
//!   and the canonical [`DensePolynomial`] value type
//! - [`interpolation`] : Newton divided-difference interpolation producing
//!   a [`DensePolynomial`]

pub mod function;
pub mod interpolation;

pub use function::{DensePolynomial, Polynomial, RealValuedFunction};
pub use interpolation::{InterpolationAlgorithm, NewtonInterpolation, PolynomialInterpolation};
