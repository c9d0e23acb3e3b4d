//! Narrowing raw payloads into trusted kinship-core records.
//!
//! This is the only place external data is validated. Each record is
//! checked on its own; a malformed one is logged and set aside, and the
//! rest of the batch carries on.

use chrono::{DateTime, Utc};
use kinship_core::{LikeRecord, MalformedEventError, PostKind, PostRecord, Profile};

use crate::raw::{RawLike, RawPost, RawProfile};

/// Records that passed validation, and the errors for those that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrowed<T> {
    pub records: Vec<T>,
    pub rejected: Vec<MalformedEventError>,
}

impl<T> Default for Narrowed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Narrowed<T> {
    fn collect<R>(raw: &[R], narrow: impl Fn(&R) -> Result<T, MalformedEventError>) -> Self {
        let mut out = Self::default();
        for item in raw {
            match narrow(item) {
                Ok(record) => out.records.push(record),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed record");
                    out.rejected.push(err);
                }
            }
        }
        out
    }
}

fn required<'a>(value: Option<&'a str>, record: &'static str, field: &'static str) -> Result<&'a str, MalformedEventError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MalformedEventError::missing(record, field)),
    }
}

fn timestamp(value: Option<&str>, record: &'static str, field: &'static str) -> Result<DateTime<Utc>, MalformedEventError> {
    let raw = required(value, record, field)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| MalformedEventError::invalid(record, field, raw, "is not an RFC 3339 timestamp"))
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Validate a profile. The id is required; a missing handle falls back to it.
pub fn narrow_profile(raw: &RawProfile) -> Result<Profile, MalformedEventError> {
    let id = required(raw.id.as_deref(), "profile", "id")?;
    Ok(Profile {
        id: id.into(),
        handle: non_blank(&raw.handle).unwrap_or_else(|| id.to_string()),
        display_name: non_blank(&raw.display_name),
        avatar_url: non_blank(&raw.avatar),
        verified: raw.verified.unwrap_or(false),
    })
}

fn post_kind(value: Option<&str>) -> Result<PostKind, MalformedEventError> {
    let raw = required(value, "post", "kind")?;
    match raw.to_ascii_lowercase().as_str() {
        "reply" => Ok(PostKind::Reply),
        "quote" => Ok(PostKind::Quote),
        "retweet" | "repost" => Ok(PostKind::Retweet),
        _ => Err(MalformedEventError::invalid("post", "kind", raw, "is not a known post kind")),
    }
}

/// Validate a reply-type post.
///
/// A reply target that is absent or has no id becomes `None`: the post is
/// still valid, its target is just unknown.
pub fn narrow_post(raw: &RawPost) -> Result<PostRecord, MalformedEventError> {
    let id = required(raw.id.as_deref(), "post", "id")?;
    let kind = post_kind(raw.kind.as_deref())?;
    let author = raw
        .author
        .as_ref()
        .ok_or_else(|| MalformedEventError::missing("post", "author"))
        .and_then(narrow_profile)?;
    let created_at = timestamp(raw.created_at.as_deref(), "post", "createdAt")?;
    let reply_target = raw.reply_to.as_ref().and_then(|t| narrow_profile(t).ok());

    Ok(PostRecord {
        id: id.to_string(),
        kind,
        author,
        reply_target,
        created_at,
    })
}

/// Validate a like.
pub fn narrow_like(raw: &RawLike) -> Result<LikeRecord, MalformedEventError> {
    let content_id = required(raw.subject.as_deref(), "like", "subject")?;
    let content_author = raw
        .subject_author
        .as_ref()
        .ok_or_else(|| MalformedEventError::missing("like", "subjectAuthor"))
        .and_then(narrow_profile)?;
    let liked_at = timestamp(raw.liked_at.as_deref(), "like", "likedAt")?;

    Ok(LikeRecord {
        content_id: content_id.to_string(),
        content_author,
        liked_at,
    })
}

pub fn narrow_posts(raw: &[RawPost]) -> Narrowed<PostRecord> {
    Narrowed::collect(raw, narrow_post)
}

pub fn narrow_likes(raw: &[RawLike]) -> Narrowed<LikeRecord> {
    Narrowed::collect(raw, narrow_like)
}

pub fn narrow_profiles(raw: &[RawProfile]) -> Narrowed<Profile> {
    Narrowed::collect(raw, narrow_profile)
}
