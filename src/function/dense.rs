//! Dense univariate polynomial in canonical form.
//!
//! [`DensePolynomial`] stores its coefficients lowest degree first. The
//! stored sequence is always canonical:
//! - the highest entry is non-zero, or
//! - the sequence is exactly `[0.0]` (the zero polynomial).
//!
//! Hence `coefficients().len() == degree() + 1`. Values are immutable;
//! every operation routes its result through the same canonicalizing
//! constructor and returns a new, independently owned polynomial.
//!
//! Arithmetic is total. Degenerate inputs (infinite or NaN coefficients,
//! overflow) propagate IEEE values instead of returning errors.


use std::fmt;
use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;

use crate::function::errors::PolynomialError;
use crate::function::traits::{Polynomial, RealValuedFunction};


#[derive(Clone)]
pub struct DensePolynomial {
    coefficients: Vec<f64>,
    // memoized `hash_code`, a pure function of `coefficients`
    hash: OnceCell<u64>,
}

/// Trims trailing zeros; keeps a single `0.0` for the zero polynomial.
#[inline]
fn canonical_len(coefficients: &[f64]) -> usize {
    coefficients
        .iter()
        .rposition(|&c| c != 0.0)
        .map_or(1, |idx| idx + 1)
}

/// Bit pattern used for hashing. `-0.0 == 0.0`, so both hash alike.
#[inline]
fn coefficient_bits(c: f64) -> u64 {
    if c == 0.0 { 0 } else { c.to_bits() }
}


impl DensePolynomial {
    /// Canonicalizing constructor. The input is copied, so later changes
    /// to the caller's slice are never observed.
    pub fn from_coefficients(coefficients: &[f64]) -> Self {
        Self::from(coefficients.to_vec())
    }

    pub fn zero() -> Self {
        Self::from(vec![0.0])
    }

    pub fn one() -> Self {
        Self::from(vec![1.0])
    }

    pub fn constant(c: f64) -> Self {
        Self::from(vec![c])
    }

    /// The degree-1 factor `(x - root)`.
    pub fn linear_factor(root: f64) -> Self {
        Self::from(vec![-root, 1.0])
    }

    /// Canonical coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0] == 0.0
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.coefficients.len() - 1]
    }

    /// `true` if no coefficient is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite())
    }

    /// Checked [`Polynomial::normalize`].
    ///
    /// # Errors
    /// - [`PolynomialError::ZeroPolynomial`] for the zero polynomial.
    pub fn try_normalize(&self) -> Result<Self, PolynomialError> {
        if self.is_zero() {
            return Err(PolynomialError::ZeroPolynomial);
        }
        Ok(self.normalize())
    }

    /// Hash over the canonical coefficients, computed on first use and
    /// memoized. Equal polynomials have equal hash codes.
    pub fn hash_code(&self) -> u64 {
        *self.hash.get_or_init(|| {
            self.coefficients
                .iter()
                .fold(0u64, |acc, &c| acc.wrapping_mul(31).wrapping_add(coefficient_bits(c)))
        })
    }
}


impl From<Vec<f64>> for DensePolynomial {
    fn from(mut coefficients: Vec<f64>) -> Self {
        let len = canonical_len(&coefficients);
        coefficients.truncate(len);
        if coefficients.is_empty() {
            coefficients.push(0.0);
        }
        // the zero polynomial is always stored as +0.0
        if coefficients.len() == 1 && coefficients[0] == 0.0 {
            coefficients[0] = 0.0;
        }
        coefficients.shrink_to_fit();

        Self { coefficients, hash: OnceCell::new() }
    }
}

impl From<&[f64]> for DensePolynomial {
    fn from(coefficients: &[f64]) -> Self {
        Self::from_coefficients(coefficients)
    }
}

impl Default for DensePolynomial {
    fn default() -> Self {
        Self::zero()
    }
}


impl RealValuedFunction for DensePolynomial {
    /// Horner's scheme, starting from the leading coefficient.
    #[inline]
    fn f(&self, x: f64) -> f64 {
        match self.coefficients.split_last() {
            Some((&lead, rest)) => rest.iter().rev().fold(lead, |value, &c| value * x + c),
            None                => 0.0,
        }
    }
}

impl Polynomial for DensePolynomial {
    #[inline]
    fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[inline]
    fn coefficient(&self, degree: usize) -> f64 {
        self.coefficients.get(degree).copied().unwrap_or(0.0)
    }

    /// Zero coefficients are left untouched (never divided, so no `-0.0`
    /// artifacts) and the leading coefficient is set to exactly 1.
    ///
    /// The zero polynomial has no leading term and is returned unchanged.
    /// It is neither divided by its leading coefficient, which would yield
    /// NaN, nor has its constant term forced to 1, which would yield the
    /// constant polynomial `1`. Use
    /// [`DensePolynomial::try_normalize`] to reject it instead.
    fn normalize(&self) -> DensePolynomial {
        if self.is_zero() {
            return self.clone();
        }

        let lead = self.leading_coefficient();
        let n    = self.coefficients.len();

        let mut normalized: Vec<f64> = self.coefficients[..n - 1]
            .iter()
            .map(|&c| if c != 0.0 { c / lead } else { c })
            .collect();
        normalized.push(1.0);

        DensePolynomial::from(normalized)
    }

    fn multiply_scalar(&self, scalar: f64) -> DensePolynomial {
        DensePolynomial::from(
            self.coefficients.iter().map(|&c| c * scalar).collect::<Vec<_>>()
        )
    }

    fn differentiate(&self) -> DensePolynomial {
        // (i+1) * c[i+1] for i in 0..degree; empty for constants
        let derivative: Vec<f64> = self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * i as f64)
            .collect();

        DensePolynomial::from(derivative)
    }

    fn add(&self, other: &dyn Polynomial) -> DensePolynomial {
        let len = self.degree().max(other.degree()) + 1;
        DensePolynomial::from(
            (0..len)
                .map(|i| self.coefficient(i) + other.coefficient(i))
                .collect::<Vec<_>>()
        )
    }

    fn subtract(&self, other: &dyn Polynomial) -> DensePolynomial {
        let len = self.degree().max(other.degree()) + 1;
        DensePolynomial::from(
            (0..len)
                .map(|i| self.coefficient(i) - other.coefficient(i))
                .collect::<Vec<_>>()
        )
    }

    fn multiply(&self, other: &dyn Polynomial) -> DensePolynomial {
        let deg_a = self.degree();
        let deg_b = other.degree();

        // schoolbook convolution, O(deg_a * deg_b)
        let mut product = vec![0.0; deg_a + deg_b + 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for j in 0..=deg_b {
                product[i + j] += a * other.coefficient(j);
            }
        }

        DensePolynomial::from(product)
    }
}


impl PartialEq for DensePolynomial {
    /// Exact floating-point comparison of the canonical coefficients.
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl Hash for DensePolynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Debug for DensePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DensePolynomial")
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

impl fmt::Display for DensePolynomial {
    /// Terms from the highest degree down, e.g. `[1*x^3+-4.5*x^2+1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "[0]");
        }

        write!(f, "[")?;
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;

            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
        }
        write!(f, "]")
    }
}


// operator sugar; each delegates to `Polynomial`, owned forms forward to
// the reference forms

impl std::ops::Add<&DensePolynomial> for &DensePolynomial {
    type Output = DensePolynomial;

    fn add(self, rhs: &DensePolynomial) -> DensePolynomial {
        <DensePolynomial as Polynomial>::add(self, rhs)
    }
}

impl std::ops::Sub<&DensePolynomial> for &DensePolynomial {
    type Output = DensePolynomial;

    fn sub(self, rhs: &DensePolynomial) -> DensePolynomial {
        <DensePolynomial as Polynomial>::subtract(self, rhs)
    }
}

impl std::ops::Mul<&DensePolynomial> for &DensePolynomial {
    type Output = DensePolynomial;

    fn mul(self, rhs: &DensePolynomial) -> DensePolynomial {
        <DensePolynomial as Polynomial>::multiply(self, rhs)
    }
}

impl std::ops::Mul<f64> for &DensePolynomial {
    type Output = DensePolynomial;

    fn mul(self, scalar: f64) -> DensePolynomial {
        self.multiply_scalar(scalar)
    }
}

impl std::ops::Neg for &DensePolynomial {
    type Output = DensePolynomial;

    fn neg(self) -> DensePolynomial {
        self.multiply_scalar(-1.0)
    }
}

impl std::ops::Add for DensePolynomial {
    type Output = DensePolynomial;

    fn add(self, rhs: DensePolynomial) -> DensePolynomial {
        &self + &rhs
    }
}

impl std::ops::Sub for DensePolynomial {
    type Output = DensePolynomial;

    fn sub(self, rhs: DensePolynomial) -> DensePolynomial {
        &self - &rhs
    }
}

impl std::ops::Mul for DensePolynomial {
    type Output = DensePolynomial;

    fn mul(self, rhs: DensePolynomial) -> DensePolynomial {
        &self * &rhs
    }
}

impl std::ops::Mul<f64> for DensePolynomial {
    type Output = DensePolynomial;

    fn mul(self, scalar: f64) -> DensePolynomial {
        &self * scalar
    }
}

impl std::ops::Neg for DensePolynomial {
    type Output = DensePolynomial;

    fn neg(self) -> DensePolynomial {
        -&self
    }
}
