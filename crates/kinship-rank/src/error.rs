//! Error types for kinship-rank.

use thiserror::Error;

/// Result type for kinship-rank operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A rank configuration that would not produce a meaningful ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A score term is negative or not finite.
    #[error("invalid {name}: {value} (must be finite and non-negative)")]
    InvalidScoreTerm { name: &'static str, value: f64 },

    /// The selected list would always be empty.
    #[error("max_nodes must be at least 1")]
    EmptySelection,
}
