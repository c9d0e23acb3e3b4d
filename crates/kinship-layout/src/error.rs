//! Error types for kinship-layout.

use thiserror::Error;

use crate::RingKind;

/// Result type for kinship-layout operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A ring configuration that could not hold every node it may be given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A ring's minimum is above its cap.
    #[error("{ring} ring minimum {min} exceeds its cap {cap}")]
    MinimumExceedsCap { ring: RingKind, min: usize, cap: usize },

    /// A layout mode's capacity is below the node count that selects it.
    #[error("{mode} layout holds {capacity} nodes but must hold {required}")]
    CapacityTooSmall {
        mode: &'static str,
        capacity: usize,
        required: usize,
    },
}
