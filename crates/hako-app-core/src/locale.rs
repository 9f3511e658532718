// SPDX-License-Identifier: Apache-2.0
//! Language selection for localized text.
//!
//! There is no process-wide language global: consumers receive a
//! [`Language`] value explicitly, typically loaded once at startup through
//! the prefs seam in [`crate::prefs`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Recognized languages for localized framework text.
///
/// English is the documented default; any unrecognized external value
/// (config file, environment, CLI) falls back to it instead of propagating
/// an invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English text. The default.
    #[default]
    English,
    /// Japanese text.
    Japanese,
}

impl Language {
    /// Resolves a language from an external tag, falling back to
    /// [`Language::English`] for anything unrecognized.
    ///
    /// Accepts BCP 47-style primary tags as well as full names, case- and
    /// whitespace-insensitively.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ja" | "jpn" | "japanese" => Self::Japanese,
            _ => Self::English,
        }
    }

    /// Canonical tag for this language (`"en"` or `"ja"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }
}

/// Parsing never fails: unrecognized input resolves to the default.
impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Serializes as the canonical tag.
impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Deserializes from a tag string; unrecognized tags fall back to the
/// default rather than failing the whole prefs load.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Saved locale preferences for a tool or game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocalePrefs {
    /// Language for localized text.
    #[serde(default)]
    pub language: Language,
}
