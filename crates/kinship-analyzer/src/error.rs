//! Error types for the analyzer.

use kinship_source::SourceError;
use thiserror::Error;

/// Result type for analyzer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur setting up or running an analysis.
#[derive(Debug, Error)]
pub enum Error {
    /// Weight configuration rejected
    #[error("weight config: {0}")]
    Weight(#[from] kinship_core::ConfigError),

    /// Rank configuration rejected
    #[error("rank config: {0}")]
    Rank(#[from] kinship_rank::ConfigError),

    /// Radial configuration rejected
    #[error("radial config: {0}")]
    Layout(#[from] kinship_layout::ConfigError),

    /// The ranking selects more nodes than the radial layout holds.
    #[error("rank selects {selected} nodes but the radial layout holds {capacity}")]
    SelectionExceedsLayout { selected: usize, capacity: usize },

    /// Data source error
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Config file could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
