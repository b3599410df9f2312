//! Contract traits for algorithm implementations
//!
//! - [`Predictor`]: The primary trait for time series prediction

mod predictor;

pub use predictor::Predictor;
