use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("the zero polynomial has no leading coefficient to normalize by")]
    ZeroPolynomial,
}
