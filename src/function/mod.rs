pub mod dense;
pub mod errors;
pub mod traits;
pub use dense::DensePolynomial;
pub use traits::{Polynomial, RealValuedFunction};
