//! Mutable image tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};
use crate::grammar::{is_tag, TAG_MAX_LENGTH};

/// The tag assumed by registries when a reference carries none.
pub const DEFAULT_TAG: &str = "latest";

/// A human-readable label bound to a repository name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Validate and wrap a tag string.
    pub fn parse(s: &str) -> Result<Self> {
        if is_tag(s) {
            return Ok(Self(s.to_string()));
        }
        let reason = if s.is_empty() {
            "tag must not be empty".to_string()
        } else if s.len() > TAG_MAX_LENGTH {
            format!("tag must not exceed {TAG_MAX_LENGTH} characters")
        } else {
            "tag must match [A-Za-z0-9_][A-Za-z0-9_.-]*".to_string()
        };
        Err(ReferenceError::InvalidTag {
            tag: s.to_string(),
            reason,
        })
    }

    /// The `latest` tag.
    pub fn latest() -> Self {
        Self(DEFAULT_TAG.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Tag {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tag {
    type Error = ReferenceError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_tags() {
        assert_eq!(Tag::parse("v1").unwrap().as_str(), "v1");
        assert!(Tag::parse("1.21.0-alpine").is_ok());
        assert!(Tag::parse("__").is_ok());
    }

    #[test]
    fn latest_is_valid() {
        assert_eq!(Tag::latest(), Tag::parse(DEFAULT_TAG).unwrap());
    }

    #[test]
    fn reject_empty() {
        let err = Tag::parse("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn reject_too_long() {
        let err = Tag::parse(&"x".repeat(129)).unwrap_err();
        assert!(err.to_string().contains("128"));
    }

    #[test]
    fn reject_bad_characters() {
        assert!(Tag::parse("v1/2").is_err());
        assert!(Tag::parse(".v1").is_err());
        assert!(Tag::parse("v1!").is_err());
    }
}
