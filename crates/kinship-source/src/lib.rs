//! Kinship Source
//!
//! The boundary between a social platform and the kinship engine.
//!
//! # Flow
//!
//! ```text
//! DataSource ──► RawPost / RawLike / RawProfile ──► narrow ──► PostRecord / LikeRecord / Profile
//!   (paged, progress)        (untrusted JSON)        (validate)         (kinship-core)
//! ```
//!
//! Everything past [`narrow`] is typed and trusted. A record that fails
//! validation is logged and dropped on its own without failing its batch.
//!
//! [`SnapshotSource`] serves a JSON export of one account; a live
//! platform client would implement [`DataSource`] the same way.

mod dataset;
mod error;
pub mod narrow;
mod raw;
mod source;

pub use dataset::{Dataset, RejectionCounts};
pub use error::{Result, SourceError};
pub use narrow::Narrowed;
pub use raw::{RawLike, RawPost, RawProfile, Snapshot};
pub use source::{Channel, DataSource, Progress, SnapshotSource, DEFAULT_PAGE_SIZE};
