//! Error types for kinship-source.

use kinship_core::MalformedEventError;
use thiserror::Error;

use crate::Channel;

/// Result type for data-source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors a data source surfaces to the caller.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source cannot supply a required channel for this account.
    #[error("{channel} unavailable for {account}")]
    DataUnavailable { account: String, channel: Channel },

    /// The requested account does not resolve.
    #[error("user not found: {handle}")]
    UserNotFound { handle: String },

    /// The account's own profile failed validation.
    #[error("invalid account profile: {0}")]
    MalformedAccount(#[from] MalformedEventError),

    /// Snapshot JSON could not be parsed.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
