// SPDX-FileCopyrightText: 2026 ctxpanel contributors
// SPDX-License-Identifier: MIT

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A stable section identifier used for navigation and scroll targeting.
///
/// This is intentionally std-only and only enforces that the anchor is a
/// non-empty URL-fragment-safe segment (lowercase ASCII, digits, `-`),
/// because anchors double as jump targets in the navigation sidebar and must
/// stay stable across re-composition of the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor {
    value: String,
}

impl Anchor {
    pub fn new(value: impl Into<String>) -> Result<Self, AnchorError> {
        let value = value.into();
        validate_anchor_segment(&value)?;
        Ok(Self { value })
    }

    /// Derives an anchor from an arbitrary raw name (e.g. a custom context
    /// item name). The result is deterministic: the same raw name always
    /// yields the same anchor.
    ///
    /// Non `[a-z0-9]` runs collapse to a single `-`; a name with no usable
    /// characters falls back to `"item"`.
    pub fn slug(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        let mut pending_dash = false;
        for ch in raw.chars() {
            let ch = ch.to_ascii_lowercase();
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(ch);
            } else {
                pending_dash = true;
            }
        }
        if out.is_empty() {
            out.push_str("item");
        }
        Self { value: out }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Anchor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Anchor {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Anchor {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    Empty,
    InvalidChar(char),
}

impl fmt::Display for AnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("anchor must not be empty"),
            Self::InvalidChar(ch) => {
                write!(f, "anchor must contain only [a-z0-9-], got {ch:?}")
            }
        }
    }
}

impl std::error::Error for AnchorError {}

fn validate_anchor_segment(value: &str) -> Result<(), AnchorError> {
    if value.is_empty() {
        return Err(AnchorError::Empty);
    }
    if let Some(ch) =
        value.chars().find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-'))
    {
        return Err(AnchorError::InvalidChar(ch));
    }
    Ok(())
}

/// Human-cases a raw field name for display: `"error_context"` becomes
/// `"Error Context"`.
pub fn humanize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split(|ch: char| ch == '_' || ch == '-' || ch.is_whitespace()) {
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.is_empty() {
        out.push_str(raw);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{humanize, Anchor, AnchorError};

    #[test]
    fn anchor_rejects_empty() {
        assert_eq!(Anchor::new(""), Err(AnchorError::Empty));
    }

    #[test]
    fn anchor_rejects_uppercase_and_spaces() {
        assert_eq!(Anchor::new("Request"), Err(AnchorError::InvalidChar('R')));
        assert_eq!(Anchor::new("a b"), Err(AnchorError::InvalidChar(' ')));
    }

    #[test]
    fn slug_is_stable_and_fragment_safe() {
        let first = Anchor::slug("Error_Context (primary)");
        let second = Anchor::slug("Error_Context (primary)");
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "error-context-primary");
        Anchor::new(first.as_str()).expect("slug output is a valid anchor");
    }

    #[test]
    fn slug_falls_back_for_unusable_names() {
        assert_eq!(Anchor::slug("!!!").as_str(), "item");
        assert_eq!(Anchor::slug("").as_str(), "item");
    }

    #[test]
    fn humanize_title_cases_words() {
        assert_eq!(humanize("error_context"), "Error Context");
        assert_eq!(humanize("git-info"), "Git Info");
        assert_eq!(humanize("plain"), "Plain");
    }
}
