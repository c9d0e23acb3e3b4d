//! Loosely-typed payloads as a platform client delivers them.
//!
//! Every field is optional: nothing here is trusted until it has been
//! narrowed (see [`crate::narrow`]).

use serde::{Deserialize, Serialize};

/// An account reference as it appears in feeds and follow lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfile {
    #[serde(alias = "did")]
    pub id: Option<String>,
    pub handle: Option<String>,
    pub display_name: Option<String>,
    #[serde(alias = "avatarUrl")]
    pub avatar: Option<String>,
    pub verified: Option<bool>,
}

/// A reply, quote or retweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    #[serde(alias = "uri")]
    pub id: Option<String>,
    /// `reply`, `quote`, `retweet` (or `repost`)
    pub kind: Option<String>,
    pub author: Option<RawProfile>,
    /// Author of the parent post, for replies
    pub reply_to: Option<RawProfile>,
    /// RFC 3339
    pub created_at: Option<String>,
}

/// A like on the account's like feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLike {
    /// Liked post
    #[serde(alias = "uri")]
    pub subject: Option<String>,
    /// Author of the liked post
    pub subject_author: Option<RawProfile>,
    /// RFC 3339
    pub liked_at: Option<String>,
}

/// A materialized export of everything the engine needs for one account.
///
/// A channel left out of the export is unavailable, which is different
/// from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub account: RawProfile,
    pub replies: Option<Vec<RawPost>>,
    pub likes: Option<Vec<RawLike>>,
    pub following: Option<Vec<RawProfile>>,
    pub followers: Option<Vec<RawProfile>>,
}
