//! Error types for rope configuration.

use core::fmt;

/// Reasons a [`ChainConfig`](crate::config::ChainConfig) cannot drive a simulation.
///
/// The simulation itself never fails once constructed; only configuration is checked.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A rope needs an anchor joint and at least one free joint.
    TooFewJoints { count: usize },
    /// Total rope length must be positive and finite.
    InvalidLength,
    /// Damping must lie in [0, 1].
    InvalidDamping,
    /// End mass must be positive and finite.
    InvalidEndMass,
    /// At least one relaxation pass per frame is required.
    ZeroIterations,
    /// A tuning constant is NaN or infinite.
    NonFinite { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewJoints { count } => {
                write!(f, "rope needs at least 2 joints (got {})", count)
            }
            ConfigError::InvalidLength => write!(f, "total length must be positive and finite"),
            ConfigError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ConfigError::InvalidEndMass => write!(f, "end mass must be positive and finite"),
            ConfigError::ZeroIterations => write!(f, "constraint iterations must be at least 1"),
            ConfigError::NonFinite { field } => write!(f, "{} must be finite", field),
        }
    }
}

impl core::error::Error for ConfigError {}
