//! Fetch every channel for one account and narrow it.

use kinship_core::{LikeRecord, PostRecord, Profile};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::narrow::{narrow_likes, narrow_posts, narrow_profiles, Narrowed};
use crate::source::{DataSource, Progress};

/// Validated inputs for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub account: Profile,
    pub posts: Narrowed<PostRecord>,
    pub likes: Narrowed<LikeRecord>,
    pub following: Narrowed<Profile>,
    pub followers: Narrowed<Profile>,
}

/// Per-channel counts of records that failed validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub posts: usize,
    pub likes: usize,
    pub following: usize,
    pub followers: usize,
}

impl RejectionCounts {
    pub fn total(&self) -> usize {
        self.posts + self.likes + self.following + self.followers
    }
}

impl Dataset {
    /// Resolve `handle`, fetch all four channels and narrow them.
    ///
    /// Source errors (unknown account, unavailable channel) abort the fetch.
    /// Malformed records do not: they are kept in each channel's `rejected`.
    pub fn fetch(
        source: &(impl DataSource + ?Sized),
        handle: &str,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<Self> {
        let account = source.resolve_account(handle)?;
        tracing::debug!(account = %account.id, "resolved account");

        let posts = narrow_posts(&source.replies(&account, progress)?);
        let likes = narrow_likes(&source.likes(&account, progress)?);
        let following = narrow_profiles(&source.following(&account, progress)?);
        let followers = narrow_profiles(&source.followers(&account, progress)?);

        let dataset = Self {
            account,
            posts,
            likes,
            following,
            followers,
        };
        let rejected = dataset.rejections();
        if rejected.total() > 0 {
            tracing::warn!(
                posts = rejected.posts,
                likes = rejected.likes,
                following = rejected.following,
                followers = rejected.followers,
                "dropped malformed records"
            );
        }
        Ok(dataset)
    }

    pub fn rejections(&self) -> RejectionCounts {
        RejectionCounts {
            posts: self.posts.rejected.len(),
            likes: self.likes.rejected.len(),
            following: self.following.rejected.len(),
            followers: self.followers.rejected.len(),
        }
    }
}
