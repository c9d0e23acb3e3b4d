//! Kinship Rank
//!
//! Merges interaction weights and follow-graph classes into one
//! deterministic ranking, then feeds the two views built on top of it:
//!
//! - the **selected list** (first `max_nodes`, default 48), consumed by the
//!   radial layout;
//! - the **family tree**, fixed slots for following-only, mutual and
//!   follower-only counterparts around the account.
//!
//! # Usage
//!
//! ```ignore
//! let ranking = RankSelector::new(RankConfig::default())
//!     .rank(&account.id, &weighted, &relationships);
//! let family = ranking.family(&account, &FamilySlots::default());
//! ```

mod error;
mod family;
mod select;

pub use error::{ConfigError, Result};
pub use family::{FamilyMember, FamilySlots, FamilyTree, Layer, LayerKind};
pub use select::{tie_break, RankConfig, RankSelector, RankedNode, Ranking};
