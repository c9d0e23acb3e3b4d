//! The serializable result of one analysis run.

use chrono::{DateTime, Utc};
use kinship_core::{AggregateStats, Profile, RelationCounts};
use kinship_layout::RadialLayout;
use kinship_rank::{FamilyTree, RankedNode};
use kinship_source::RejectionCounts;
use serde::Serialize;

/// Everything a renderer needs: both views over the same ranking, and
/// counts describing how the inputs were used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub account: Profile,
    /// The `now` the weights were computed against
    pub generated_at: DateTime<Utc>,
    /// Selected counterparts, best first
    pub ranked: Vec<RankedNode>,
    pub family: FamilyTree,
    pub radial: RadialLayout,
    pub stats: RunStats,
}

/// Input accounting for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Counterparts in the full ranking, before the selection cap
    pub candidates: usize,
    /// Counterparts handed to the views
    pub selected: usize,
    pub interactions: AggregateStats,
    pub relations: RelationCounts,
    /// Records dropped as malformed at the source boundary
    pub rejected: RejectionCounts,
}

/// Which part of a [`Report`] to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    Ranked,
    Family,
    Radial,
    #[default]
    All,
}

impl Report {
    /// Serialize one view of the report.
    pub fn view(&self, view: View) -> serde_json::Result<serde_json::Value> {
        match view {
            View::Ranked => serde_json::to_value(&self.ranked),
            View::Family => serde_json::to_value(&self.family),
            View::Radial => serde_json::to_value(&self.radial),
            View::All => serde_json::to_value(self),
        }
    }
}
