//! Kinship Core
//!
//! Scoring half of the kinship engine: turns an account's interaction
//! history into per-counterpart weights, and its follow graph into
//! relationship classes.
//!
//! # Pipeline
//!
//! ```text
//! PostRecord / LikeRecord ──► aggregate() ──► Interactions ──► WeightCalculator ──► WeightedUser
//! following / followers   ──► Relationships::classify() ──► RelationClass
//! ```
//!
//! Every stage is a pure function of its inputs. Time enters only as an
//! explicit `now` argument to the weight calculator, so a run is fully
//! reproducible. The analyzed account never appears in any output.

mod aggregate;
mod error;
mod event;
mod identity;
mod relationship;
mod weight;

pub use aggregate::{aggregate, AggregateStats, Interactions, UserStatBucket};
pub use error::{ConfigError, MalformedEventError, Result};
pub use event::{Direction, InteractionEvent, InteractionKind, LikeRecord, PostKind, PostRecord};
pub use identity::{Profile, UserId};
pub use relationship::{RelationClass, RelationCounts, RelationshipRecord, Relationships};
pub use weight::{days_between, WeightCalculator, WeightConfig, WeightedUser};
