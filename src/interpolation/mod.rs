pub mod config; 
pub mod errors; 
pub mod report; 
pub mod traits;
pub use traits::{InterpolationAlgorithm, PolynomialInterpolation};

pub mod newton; 
pub use newton::NewtonInterpolation;
