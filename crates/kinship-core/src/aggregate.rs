//! Interaction aggregation.
//!
//! Folds the analyzed account's reply-type posts and likes into one
//! [`UserStatBucket`] per counterpart. Each call builds a fresh mapping; the
//! result is read-only once returned.
//!
//! # Attribution
//!
//! | Record                                    | Counterpart        | Direction |
//! |-------------------------------------------|--------------------|-----------|
//! | reply by the account, target known        | reply target       | outgoing  |
//! | reply by the account, target unknown      | skipped            |           |
//! | reply by someone else to the account      | reply author       | incoming  |
//! | reply touching neither side               | skipped            |           |
//! | quote / retweet                           | post author        | incoming  |
//! | like                                      | liked post author  | incoming  |
//!
//! Any record whose counterpart resolves to the analyzed account itself is
//! skipped, so the account never owns a bucket.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{Direction, InteractionEvent, InteractionKind, LikeRecord, PostKind, PostRecord, Profile, UserId};

/// Per-counterpart interaction statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserStatBucket {
    profile: Profile,
    replies: u32,
    replies_incoming: u32,
    replies_outgoing: u32,
    quotes: u32,
    retweets: u32,
    likes: u32,
    last_interaction: Option<DateTime<Utc>>,
    history: Vec<InteractionEvent>,
}

impl UserStatBucket {
    fn empty(profile: Profile) -> Self {
        Self {
            profile,
            replies: 0,
            replies_incoming: 0,
            replies_outgoing: 0,
            quotes: 0,
            retweets: 0,
            likes: 0,
            last_interaction: None,
            history: Vec::new(),
        }
    }

    /// Build a bucket directly from an event history.
    ///
    /// Events are kept in the order given.
    pub fn from_events(profile: Profile, events: impl IntoIterator<Item = InteractionEvent>) -> Self {
        let mut bucket = Self::empty(profile);
        for event in events {
            bucket.record(event);
        }
        bucket
    }

    fn record(&mut self, event: InteractionEvent) {
        match event.kind {
            InteractionKind::Reply => {
                self.replies += 1;
                match event.direction {
                    Direction::Incoming => self.replies_incoming += 1,
                    Direction::Outgoing => self.replies_outgoing += 1,
                }
            }
            InteractionKind::Quote => self.quotes += 1,
            InteractionKind::Retweet => self.retweets += 1,
            InteractionKind::Like => self.likes += 1,
        }
        self.last_interaction = Some(match self.last_interaction {
            Some(last) => last.max(event.timestamp),
            None => event.timestamp,
        });
        self.history.push(event);
    }

    /// The counterpart this bucket describes.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Shorthand for `profile().id`.
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }

    pub fn replies(&self) -> u32 {
        self.replies
    }

    pub fn incoming_replies(&self) -> u32 {
        self.replies_incoming
    }

    pub fn outgoing_replies(&self) -> u32 {
        self.replies_outgoing
    }

    pub fn quotes(&self) -> u32 {
        self.quotes
    }

    pub fn retweets(&self) -> u32 {
        self.retweets
    }

    pub fn likes(&self) -> u32 {
        self.likes
    }

    /// Count for a single interaction kind.
    pub fn count(&self, kind: InteractionKind) -> u32 {
        match kind {
            InteractionKind::Reply => self.replies,
            InteractionKind::Quote => self.quotes,
            InteractionKind::Retweet => self.retweets,
            InteractionKind::Like => self.likes,
        }
    }

    /// Total number of attributed events.
    pub fn total(&self) -> usize {
        self.history.len()
    }

    /// Most recent event timestamp, `None` for an empty bucket.
    pub fn last_interaction(&self) -> Option<DateTime<Utc>> {
        self.last_interaction
    }

    /// Events in attribution order.
    pub fn history(&self) -> &[InteractionEvent] {
        &self.history
    }
}

/// Counters describing what the aggregator did with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStats {
    /// Events attributed to some counterpart
    pub attributed: usize,
    /// Outgoing replies whose target was unknown
    pub unknown_target: usize,
    /// Replies touching neither side of the analyzed account
    pub unrelated: usize,
    /// Events whose counterpart was the analyzed account itself
    pub self_interactions: usize,
}

impl AggregateStats {
    /// Records that produced no event.
    pub fn skipped(&self) -> usize {
        self.unknown_target + self.unrelated + self.self_interactions
    }
}

/// The aggregator's output: one bucket per counterpart.
#[derive(Debug, Clone)]
pub struct Interactions {
    account: UserId,
    buckets: BTreeMap<UserId, UserStatBucket>,
    stats: AggregateStats,
}

impl Interactions {
    /// The analyzed account.
    pub fn account(&self) -> &UserId {
        &self.account
    }

    pub fn get(&self, id: &UserId) -> Option<&UserStatBucket> {
        self.buckets.get(id)
    }

    /// Buckets ordered by counterpart identity.
    pub fn iter(&self) -> impl Iterator<Item = &UserStatBucket> {
        self.buckets.values()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }
}

struct Aggregator<'a> {
    account: &'a UserId,
    buckets: BTreeMap<UserId, UserStatBucket>,
    stats: AggregateStats,
}

impl<'a> Aggregator<'a> {
    fn new(account: &'a UserId) -> Self {
        Self {
            account,
            buckets: BTreeMap::new(),
            stats: AggregateStats::default(),
        }
    }

    fn attribute(&mut self, counterpart: &Profile, event: InteractionEvent) {
        if &counterpart.id == self.account {
            self.stats.self_interactions += 1;
            return;
        }
        self.stats.attributed += 1;
        self.buckets
            .entry(counterpart.id.clone())
            .or_insert_with(|| UserStatBucket::empty(counterpart.clone()))
            .record(event);
    }

    fn post(&mut self, post: &PostRecord) {
        let event = |direction| InteractionEvent {
            kind: post.kind.interaction(),
            direction,
            timestamp: post.created_at,
            source_content_id: post.id.clone(),
        };

        match post.kind {
            PostKind::Reply => {
                if &post.author.id == self.account {
                    match &post.reply_target {
                        Some(target) => self.attribute(target, event(Direction::Outgoing)),
                        None => self.stats.unknown_target += 1,
                    }
                } else if post.reply_target.as_ref().map(|t| &t.id) == Some(self.account) {
                    self.attribute(&post.author, event(Direction::Incoming));
                } else {
                    self.stats.unrelated += 1;
                }
            }
            // Self-quotes land in `self_interactions` via `attribute`.
            PostKind::Quote | PostKind::Retweet => {
                self.attribute(&post.author, event(Direction::Incoming));
            }
        }
    }

    fn like(&mut self, like: &LikeRecord) {
        let event = InteractionEvent {
            kind: InteractionKind::Like,
            direction: Direction::Incoming,
            timestamp: like.liked_at,
            source_content_id: like.content_id.clone(),
        };
        self.attribute(&like.content_author, event);
    }

    fn finish(self) -> Interactions {
        tracing::debug!(
            account = %self.account,
            counterparts = self.buckets.len(),
            attributed = self.stats.attributed,
            skipped = self.stats.skipped(),
            "aggregated interactions"
        );
        Interactions {
            account: self.account.clone(),
            buckets: self.buckets,
            stats: self.stats,
        }
    }
}

/// Aggregate posts and likes into per-counterpart buckets.
///
/// Inputs are borrowed and never modified; the returned mapping is new on
/// every call.
pub fn aggregate(account: &UserId, posts: &[PostRecord], likes: &[LikeRecord]) -> Interactions {
    let mut aggregator = Aggregator::new(account);
    for post in posts {
        aggregator.post(post);
    }
    for like in likes {
        aggregator.like(like);
    }
    aggregator.finish()
}
