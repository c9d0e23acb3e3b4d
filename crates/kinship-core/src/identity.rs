//! Account identities and the profile fields the layouts display.

/// Opaque platform identity of an account (a DID, a numeric id, ...).
///
/// Two identities are the same account iff their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub String);

impl UserId {
    /// Create from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An account as seen by the layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Stable identity
    pub id: UserId,
    /// Handle (`alice.example.com`, `@alice`, ...)
    pub handle: String,
    /// Display name, if the account set one
    pub display_name: Option<String>,
    /// Avatar image location
    pub avatar_url: Option<String>,
    /// Platform verification badge
    pub verified: bool,
}

impl Profile {
    /// Create a bare profile with only identity and handle.
    pub fn new(id: impl Into<UserId>, handle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            handle: handle.into(),
            display_name: None,
            avatar_url: None,
            verified: false,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the avatar location.
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Mark the account as verified.
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// The name shown on a node: display name when non-blank, else the handle.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.handle,
        }
    }
}
