//! The data-source collaborator and a snapshot-backed implementation.

use std::path::Path;

use kinship_core::Profile;

use crate::error::{Result, SourceError};
use crate::narrow::narrow_profile;
use crate::raw::{RawLike, RawPost, RawProfile, Snapshot};

/// A paginated feed a source can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Replies,
    Likes,
    Following,
    Followers,
}

impl Channel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Replies => "replies",
            Self::Likes => "likes",
            Self::Following => "following",
            Self::Followers => "followers",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetch progress, reported after every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub channel: Channel,
    /// Items fetched so far on this channel
    pub current: usize,
    /// Items expected on this channel
    pub total: usize,
}

/// Supplies raw interaction data for a named account.
///
/// Implementations page through each channel and call `progress` after
/// every page. Returned payloads are untrusted; run them through
/// [`crate::narrow`] before use.
pub trait DataSource {
    /// Resolve a handle (or id) to the account's profile.
    fn resolve_account(&self, handle: &str) -> Result<Profile>;

    fn replies(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawPost>>;

    fn likes(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawLike>>;

    fn following(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawProfile>>;

    fn followers(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawProfile>>;
}

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A [`DataSource`] over a materialized [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
    page_size: usize,
}

impl SnapshotSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Read a snapshot JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Items per page (at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    fn page<T: Clone>(
        &self,
        account: &Profile,
        channel: Channel,
        items: Option<&Vec<T>>,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<Vec<T>> {
        let items = items.ok_or_else(|| SourceError::DataUnavailable {
            account: account.handle.clone(),
            channel,
        })?;

        let total = items.len();
        let mut fetched = Vec::with_capacity(total);
        for chunk in items.chunks(self.page_size) {
            fetched.extend_from_slice(chunk);
            progress(Progress {
                channel,
                current: fetched.len(),
                total,
            });
        }
        tracing::debug!(%channel, total, page_size = self.page_size, "fetched channel");
        Ok(fetched)
    }
}

impl DataSource for SnapshotSource {
    fn resolve_account(&self, handle: &str) -> Result<Profile> {
        let account = narrow_profile(&self.snapshot.account)?;
        let wanted = handle.trim().trim_start_matches('@');
        if account.handle.eq_ignore_ascii_case(wanted) || account.id.as_str() == wanted {
            Ok(account)
        } else {
            Err(SourceError::UserNotFound {
                handle: handle.to_string(),
            })
        }
    }

    fn replies(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawPost>> {
        self.page(account, Channel::Replies, self.snapshot.replies.as_ref(), progress)
    }

    fn likes(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawLike>> {
        self.page(account, Channel::Likes, self.snapshot.likes.as_ref(), progress)
    }

    fn following(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawProfile>> {
        self.page(account, Channel::Following, self.snapshot.following.as_ref(), progress)
    }

    fn followers(&self, account: &Profile, progress: &mut dyn FnMut(Progress)) -> Result<Vec<RawProfile>> {
        self.page(account, Channel::Followers, self.snapshot.followers.as_ref(), progress)
    }
}
