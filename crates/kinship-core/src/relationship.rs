//! Follow-graph classification.
//!
//! Splits the union of an account's `following` and `followers` sets into
//! mutual, following-only and follower-only records. Mutuality is always
//! derived from the two flags so it can never disagree with them.

use std::collections::HashMap;

use crate::{Profile, UserId};

/// Relationship between the analyzed account and a counterpart.
///
/// Ordered by ranking priority: `None < FollowerOnly < FollowingOnly < Mutual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationClass {
    #[default]
    None,
    FollowerOnly,
    FollowingOnly,
    Mutual,
}

impl RelationClass {
    /// Ranking priority (0-3).
    pub const fn priority(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::FollowerOnly => 1,
            Self::FollowingOnly => 2,
            Self::Mutual => 3,
        }
    }

    /// Class for a pair of follow flags.
    pub const fn from_flags(is_following: bool, is_follower: bool) -> Self {
        match (is_following, is_follower) {
            (true, true) => Self::Mutual,
            (true, false) => Self::FollowingOnly,
            (false, true) => Self::FollowerOnly,
            (false, false) => Self::None,
        }
    }
}

/// Follow flags for one counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRecord {
    pub profile: Profile,
    /// The analyzed account follows this counterpart
    pub is_following: bool,
    /// This counterpart follows the analyzed account
    pub is_follower: bool,
}

impl RelationshipRecord {
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }

    pub const fn is_mutual(&self) -> bool {
        self.is_following && self.is_follower
    }

    pub const fn class(&self) -> RelationClass {
        RelationClass::from_flags(self.is_following, self.is_follower)
    }
}

/// Totals per relation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationCounts {
    pub mutual: usize,
    pub following_only: usize,
    pub follower_only: usize,
}

/// Classified follow graph of one account.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    records: HashMap<UserId, RelationshipRecord>,
}

impl Relationships {
    /// Classify the union of `following` and `followers`.
    ///
    /// Duplicates collapse into one record. The analyzed account is dropped
    /// if it shows up in either list.
    pub fn classify(account: &UserId, following: &[Profile], followers: &[Profile]) -> Self {
        let mut records: HashMap<UserId, RelationshipRecord> =
            HashMap::with_capacity(following.len() + followers.len());

        for profile in following.iter().filter(|p| &p.id != account) {
            records
                .entry(profile.id.clone())
                .or_insert_with(|| RelationshipRecord {
                    profile: profile.clone(),
                    is_following: true,
                    is_follower: false,
                });
        }

        for profile in followers.iter().filter(|p| &p.id != account) {
            records
                .entry(profile.id.clone())
                .and_modify(|r| r.is_follower = true)
                .or_insert_with(|| RelationshipRecord {
                    profile: profile.clone(),
                    is_following: false,
                    is_follower: true,
                });
        }

        tracing::debug!(
            account = %account,
            following = following.len(),
            followers = followers.len(),
            distinct = records.len(),
            "classified relationships"
        );

        Self { records }
    }

    pub fn get(&self, id: &UserId) -> Option<&RelationshipRecord> {
        self.records.get(id)
    }

    /// Class of `id`, `None` when it is in neither set.
    pub fn class_of(&self, id: &UserId) -> RelationClass {
        self.records.get(id).map(RelationshipRecord::class).unwrap_or_default()
    }

    /// Records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &RelationshipRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn counts(&self) -> RelationCounts {
        self.records.values().fold(RelationCounts::default(), |mut acc, r| {
            match r.class() {
                RelationClass::Mutual => acc.mutual += 1,
                RelationClass::FollowingOnly => acc.following_only += 1,
                RelationClass::FollowerOnly => acc.follower_only += 1,
                RelationClass::None => {}
            }
            acc
        })
    }
}
