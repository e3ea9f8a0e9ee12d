//! Repository names: an optional registry authority plus a slash-separated path.
//!
//! The first `/`-separated segment of a name is treated as a registry domain
//! only when it contains a `.` or `:`, or is exactly `localhost`. Everything
//! else is path. A parsed [`Name`] always renders back to a string that parses
//! to an equal `Name`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};
use crate::grammar::{is_domain, is_path_component, looks_like_domain, NAME_TOTAL_LENGTH_MAX};

/// A structured repository identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    domain: Option<String>,
    path: String,
}

impl Name {
    /// Parse a repository name with no tag or digest attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgref_reference::Name;
    ///
    /// let name = Name::parse("registry.example.com:5000/team/app").unwrap();
    /// assert_eq!(name.domain(), Some("registry.example.com:5000"));
    /// assert_eq!(name.path(), "team/app");
    ///
    /// let name = Name::parse("team/app").unwrap();
    /// assert_eq!(name.domain(), None);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((first, rest)) if looks_like_domain(first) => Self::new(Some(first), rest),
            _ => Self::new(None, s),
        }
    }

    /// Build a name from a domain and path, validating both.
    ///
    /// Fails with [`ReferenceError::AmbiguousPath`] when `domain` is `None` and
    /// the first path segment would itself be read back as a domain.
    pub fn new(domain: Option<&str>, path: &str) -> Result<Self> {
        if path.is_empty() {
            let input = match domain {
                Some(d) => format!("{d}/"),
                None => String::new(),
            };
            return Err(ReferenceError::NameEmpty { input });
        }

        let len = domain.map_or(0, |d| d.len() + 1) + path.len();
        if len > NAME_TOTAL_LENGTH_MAX {
            return Err(ReferenceError::NameTooLong {
                len,
                max: NAME_TOTAL_LENGTH_MAX,
            });
        }

        if let Some(domain) = domain {
            if !is_domain(domain) {
                return Err(ReferenceError::InvalidDomain {
                    domain: domain.to_string(),
                });
            }
        }

        for component in path.split('/') {
            if is_path_component(component) {
                continue;
            }
            if is_path_component(&component.to_ascii_lowercase()) {
                return Err(ReferenceError::NameNotLowercase {
                    name: render(domain, path),
                });
            }
            return Err(ReferenceError::InvalidPath {
                component: component.to_string(),
            });
        }

        if domain.is_none() && path.contains('/') {
            let first = path.split('/').next().unwrap_or_default();
            if looks_like_domain(first) {
                return Err(ReferenceError::AmbiguousPath {
                    path: path.to_string(),
                });
            }
        }

        Ok(Self {
            domain: domain.map(str::to_string),
            path: path.to_string(),
        })
    }

    /// The registry authority (`host[:port]`), if present.
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// The repository path without the registry authority.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn render(domain: Option<&str>, path: &str) -> String {
    match domain {
        Some(d) => format!("{d}/{path}"),
        None => path.to_string(),
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.domain {
            Some(domain) => write!(f, "{domain}/{}", self.path),
            None => f.write_str(&self.path),
        }
    }
}

impl FromStr for Name {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Name {
    type Error = ReferenceError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.to_string()
    }
}
