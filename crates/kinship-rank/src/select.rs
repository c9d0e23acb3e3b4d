//! Ranking of counterparts.
//!
//! Every counterpart gets one score:
//!
//! ```text
//! score = priority(relation) × 50 + weight + (verified ? 10 : 0)
//! ```
//!
//! # Tie-break chain
//!
//! Applied in order until one step decides:
//!
//! 1. higher score
//! 2. more recent last interaction (never interacted sorts earliest)
//! 3. higher raw weight
//! 4. display label, case-insensitive
//! 5. user id
//!
//! The last step only matters for two counterparts with identical labels, and
//! keeps the order total so reruns never shuffle them.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use kinship_core::{Profile, RelationClass, Relationships, UserId, WeightedUser};

use crate::error::{ConfigError, Result};
use crate::family::{FamilySlots, FamilyTree};

/// Score parameters and the size of the selected list.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankConfig {
    /// Score added per relation priority step
    pub relation_step: f64,
    /// Score added for a verified account
    pub verified_bonus: f64,
    /// Length of the selected list handed to layouts
    pub max_nodes: usize,
    /// Family view slot capacities
    pub family: FamilySlots,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            relation_step: 50.0,
            verified_bonus: 10.0,
            max_nodes: 48,
            family: FamilySlots::default(),
        }
    }
}

impl RankConfig {
    /// Check the score terms are finite and non-negative, and that the
    /// selection holds at least one node.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("relation_step", self.relation_step),
            ("verified_bonus", self.verified_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidScoreTerm { name, value });
            }
        }
        if self.max_nodes == 0 {
            return Err(ConfigError::EmptySelection);
        }
        Ok(())
    }

    /// Score for a relation, weight and verification flag.
    pub fn score(&self, relation: RelationClass, weight: f64, verified: bool) -> f64 {
        let bonus = if verified { self.verified_bonus } else { 0.0 };
        f64::from(relation.priority()) * self.relation_step + weight + bonus
    }
}

/// A counterpart placed in the ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedNode {
    pub profile: Profile,
    pub relation: RelationClass,
    pub score: f64,
    pub weight: f64,
    pub last_interaction: Option<DateTime<Utc>>,
    /// Interactions attributed to this counterpart
    pub interactions: usize,
    /// 0-based position in the full ranking
    pub rank: usize,
}

impl RankedNode {
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }
}

/// Order two ranked nodes by the tie-break chain. `Less` ranks first.
pub fn tie_break(a: &RankedNode, b: &RankedNode) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.last_interaction.cmp(&a.last_interaction))
        .then_with(|| b.weight.total_cmp(&a.weight))
        .then_with(|| compare_labels(a.profile.label(), b.profile.label()))
        .then_with(|| a.profile.id.cmp(&b.profile.id))
}

fn compare_labels(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Full ranking of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    nodes: Vec<RankedNode>,
    limit: usize,
}

impl Ranking {
    /// Every candidate, best first.
    pub fn all(&self) -> &[RankedNode] {
        &self.nodes
    }

    /// The first `max_nodes` candidates.
    pub fn selected(&self) -> &[RankedNode] {
        &self.nodes[..self.limit.min(self.nodes.len())]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Fill the family view from the full ranking.
    pub fn family(&self, account: &Profile, slots: &FamilySlots) -> FamilyTree {
        FamilyTree::build(account, &self.nodes, slots)
    }
}

struct Candidate<'a> {
    profile: &'a Profile,
    relation: RelationClass,
    weight: f64,
    last_interaction: Option<DateTime<Utc>>,
    interactions: usize,
}

/// Ranks counterparts with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct RankSelector {
    config: RankConfig,
}

impl RankSelector {
    pub fn new(config: RankConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Merge weights and relationships into one ranking.
    ///
    /// Candidates are every weighted counterpart plus every classified
    /// relationship. Follow-only counterparts weigh 0 and have no last
    /// interaction; interacting strangers have relation `None`. When both
    /// sources know a counterpart, the follow-graph profile is shown.
    pub fn rank(&self, account: &UserId, weighted: &[WeightedUser<'_>], relationships: &Relationships) -> Ranking {
        let mut candidates: HashMap<&UserId, Candidate<'_>> =
            HashMap::with_capacity(weighted.len() + relationships.len());

        for user in weighted.iter().filter(|u| u.bucket.id() != account) {
            let record = relationships.get(user.bucket.id());
            candidates.insert(
                user.bucket.id(),
                Candidate {
                    profile: record.map_or(user.bucket.profile(), |r| &r.profile),
                    relation: record.map(|r| r.class()).unwrap_or_default(),
                    weight: user.weight.max(0.0),
                    last_interaction: user.bucket.last_interaction(),
                    interactions: user.bucket.total(),
                },
            );
        }

        for record in relationships.iter().filter(|r| r.id() != account) {
            candidates.entry(record.id()).or_insert_with(|| Candidate {
                profile: &record.profile,
                relation: record.class(),
                weight: 0.0,
                last_interaction: None,
                interactions: 0,
            });
        }

        let mut nodes: Vec<RankedNode> = candidates
            .into_values()
            .map(|c| RankedNode {
                profile: c.profile.clone(),
                relation: c.relation,
                score: self.config.score(c.relation, c.weight, c.profile.verified),
                weight: c.weight,
                last_interaction: c.last_interaction,
                interactions: c.interactions,
                rank: 0,
            })
            .collect();

        nodes.sort_by(tie_break);
        for (rank, node) in nodes.iter_mut().enumerate() {
            node.rank = rank;
        }

        tracing::debug!(
            account = %account,
            candidates = nodes.len(),
            selected = self.config.max_nodes.min(nodes.len()),
            "ranked counterparts"
        );

        Ranking {
            nodes,
            limit: self.config.max_nodes,
        }
    }
}
