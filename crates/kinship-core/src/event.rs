//! Interaction events and the typed input records they are derived from.
//!
//! Records arrive already narrowed from external payloads; every field here
//! is trusted. An [`InteractionEvent`] is what ends up in a counterpart's
//! history once the aggregator has decided who the counterpart is.

use chrono::{DateTime, Utc};

use crate::Profile;

/// Kind of interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InteractionKind {
    Reply,
    Quote,
    Retweet,
    Like,
}

impl InteractionKind {
    /// All kinds, in coefficient order.
    pub const ALL: [Self; 4] = [Self::Reply, Self::Quote, Self::Retweet, Self::Like];

    /// Lowercase name, used in logs and error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reply => "reply",
            Self::Quote => "quote",
            Self::Retweet => "retweet",
            Self::Like => "like",
        }
    }
}

impl std::fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction relative to the analyzed account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// The counterpart acted toward the analyzed account
    Incoming,
    /// The analyzed account acted toward the counterpart
    Outgoing,
}

/// One attributed interaction in a counterpart's history.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
    /// Post (or liked post) the event came from
    pub source_content_id: String,
}

/// Which kind of post a [`PostRecord`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PostKind {
    Reply,
    Quote,
    Retweet,
}

impl PostKind {
    /// The interaction kind this post counts as.
    pub const fn interaction(&self) -> InteractionKind {
        match self {
            Self::Reply => InteractionKind::Reply,
            Self::Quote => InteractionKind::Quote,
            Self::Retweet => InteractionKind::Retweet,
        }
    }
}

/// A reply-type post touching the analyzed account's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Content identifier of the post itself
    pub id: String,
    pub kind: PostKind,
    pub author: Profile,
    /// Author of the post being replied to, when the platform resolved it
    pub reply_target: Option<Profile>,
    pub created_at: DateTime<Utc>,
}

/// A like recorded on the analyzed account's like feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRecord {
    /// Content identifier of the liked post
    pub content_id: String,
    /// Author of the liked post
    pub content_author: Profile,
    pub liked_at: DateTime<Utc>,
}
