//! Slug normalization.
//!
//! A slug is the readable part of a URL (`contact_us`) used as the rule key.
//! Every entry point runs raw input through [`Slug::parse`], so `Contact Us`,
//! `contact_us` and `contact%20us` all name the same rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowercases `raw` and replaces spaces with underscores.
///
/// Pure and idempotent: `make_readable(&make_readable(x)) == make_readable(x)`.
pub fn make_readable(raw: &str) -> String {
    raw.replace(' ', "_").to_lowercase()
}

/// Decodes form-style URL escaping: `+` is a space, `%XX` a byte.
/// Malformed escapes are kept as-is and invalid UTF-8 is replaced lossily.
fn url_decode(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(plus_decoded.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Normalized rule key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// URL-decodes `raw` and normalizes it with [`make_readable`].
    pub fn parse(raw: &str) -> Self {
        Slug(make_readable(&url_decode(raw)))
    }

    /// Wraps a key that is already normalized (e.g. read back from the rule document).
    pub(crate) fn from_normalized(key: impl Into<String>) -> Self {
        Slug(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
