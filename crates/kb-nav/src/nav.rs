//! Top navigation bar entries.

use serde::{Deserialize, Serialize};

/// Entry in the top navigation bar.
///
/// Entries are declared in configuration and rendered in authored order.
/// The active entry is determined by [`NavEntry::is_active`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavEntry {
    /// Display text.
    pub text: String,
    /// Link target path (e.g., `/guide/`) or absolute URL.
    pub link: String,
    /// Path prefix that marks this entry active.
    ///
    /// When absent, `link` itself is used as the prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_match: Option<String>,
}

impl NavEntry {
    /// Create an entry with text and link.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
            active_match: None,
        }
    }

    /// Set the active-match prefix.
    #[must_use]
    pub fn with_active_match(mut self, prefix: impl Into<String>) -> Self {
        self.active_match = Some(prefix.into());
        self
    }

    /// Whether this entry should be highlighted for the given page path.
    ///
    /// Matches `active_match` (or `link` when unset) as a path prefix.
    /// An entry linking to `/` is only active on the root page itself,
    /// otherwise every entry would light up on every page.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        let prefix = self.active_match.as_deref().unwrap_or(&self.link);
        if prefix == "/" {
            return path == "/";
        }
        path.starts_with(prefix)
    }
}
