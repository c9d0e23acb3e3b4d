//! Error types for kinship-core.

use thiserror::Error;

/// Result type for fallible kinship-core constructors.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid weighting configuration, reported before any event is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A per-kind coefficient is negative, NaN or infinite.
    #[error("invalid {name} coefficient: {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    /// The decay constant is negative, NaN or infinite.
    #[error("invalid decay constant: {0}")]
    InvalidDecay(f64),
}

/// A single external record that could not be narrowed into a typed one.
///
/// Carries enough detail to build a message; the batch it came from
/// continues without it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {record} record: {field} {reason} (value: {value:?})")]
pub struct MalformedEventError {
    /// Record type (`post`, `like`, `profile`)
    pub record: &'static str,
    /// Offending field
    pub field: &'static str,
    /// Offending raw value, empty when absent
    pub value: String,
    /// What was wrong with it
    pub reason: &'static str,
}

impl MalformedEventError {
    /// A required field was absent or blank.
    pub fn missing(record: &'static str, field: &'static str) -> Self {
        Self {
            record,
            field,
            value: String::new(),
            reason: "is missing",
        }
    }

    /// A field was present but could not be interpreted.
    pub fn invalid(record: &'static str, field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            record,
            field,
            value: value.into(),
            reason,
        }
    }
}
