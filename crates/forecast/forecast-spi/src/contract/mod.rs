//! Contract module containing trait definitions for forecast operations

mod estimator;

pub use estimator::Estimator;
