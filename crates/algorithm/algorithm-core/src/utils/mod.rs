//! Utility functions shared by the estimators

pub mod optimization;
pub mod preprocessing;
pub mod validation;

pub use optimization::{nelder_mead, Minimum, NelderMeadConfig};
pub use preprocessing::{difference, integrate};
pub use validation::ensure_finite;
