//! Parsed image references and their classification.
//!
//! A reference is a [`Name`] with zero or one [`Tag`] and zero or one
//! [`Digest`]. The shape is fixed at construction time as one of three
//! variants, so classification is an exhaustive match rather than a probe
//! of optional fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::error::ReferenceError;
use crate::name::Name;
use crate::tag::Tag;

/// A structured image reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Reference {
    /// A name with neither tag nor digest.
    Bare(Name),

    /// A name qualified by a mutable tag.
    Tagged {
        /// Repository name.
        name: Name,
        /// The tag.
        tag: Tag,
    },

    /// A name pinned to an immutable content digest.
    ///
    /// A tag may ride along; it does not affect classification.
    Canonical {
        /// Repository name.
        name: Name,
        /// Optional tag written alongside the digest.
        tag: Option<Tag>,
        /// The content digest.
        digest: Digest,
    },
}

/// The addressing mode of a [`Reference`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Name only.
    Bare,
    /// Name and tag, no digest.
    Tagged,
    /// Name and digest, with or without a tag.
    Canonical,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Bare => write!(f, "bare"),
            ReferenceKind::Tagged => write!(f, "tagged"),
            ReferenceKind::Canonical => write!(f, "canonical"),
        }
    }
}

impl Reference {
    pub fn bare(name: Name) -> Self {
        Reference::Bare(name)
    }

    pub fn tagged(name: Name, tag: Tag) -> Self {
        Reference::Tagged { name, tag }
    }

    pub fn canonical(name: Name, digest: Digest) -> Self {
        Reference::Canonical {
            name,
            tag: None,
            digest,
        }
    }

    /// Assemble a reference from optional parts, picking the variant.
    pub fn from_parts(name: Name, tag: Option<Tag>, digest: Option<Digest>) -> Self {
        match (tag, digest) {
            (tag, Some(digest)) => Reference::Canonical { name, tag, digest },
            (Some(tag), None) => Reference::Tagged { name, tag },
            (None, None) => Reference::Bare(name),
        }
    }

    /// Returns a copy of this reference carrying `tag`, keeping any digest.
    pub fn with_tag(&self, tag: Tag) -> Self {
        Self::from_parts(self.name().clone(), Some(tag), self.digest().cloned())
    }

    /// Returns a copy of this reference pinned to `digest`, keeping any tag.
    pub fn with_digest(&self, digest: Digest) -> Self {
        Self::from_parts(self.name().clone(), self.tag().cloned(), Some(digest))
    }

    pub fn name(&self) -> &Name {
        match self {
            Reference::Bare(name) => name,
            Reference::Tagged { name, .. } => name,
            Reference::Canonical { name, .. } => name,
        }
    }

    /// The tag, if any. Also returned for canonical references that carry one.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Reference::Bare(_) => None,
            Reference::Tagged { tag, .. } => Some(tag),
            Reference::Canonical { tag, .. } => tag.as_ref(),
        }
    }

    pub fn digest(&self) -> Option<&Digest> {
        match self {
            Reference::Canonical { digest, .. } => Some(digest),
            _ => None,
        }
    }

    /// Classify this reference. Digest presence always wins over tag presence.
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Reference::Bare(_) => ReferenceKind::Bare,
            Reference::Tagged { .. } => ReferenceKind::Tagged,
            Reference::Canonical { .. } => ReferenceKind::Canonical,
        }
    }

    /// `name:tag` if a tag is present.
    pub fn tagged_string(&self) -> Option<String> {
        self.tag().map(|tag| format!("{}:{tag}", self.name()))
    }

    /// `name@digest` if a digest is present. Any tag is omitted.
    pub fn digest_string(&self) -> Option<String> {
        self.digest().map(|digest| format!("{}@{digest}", self.name()))
    }
}

/// Classify a reference as bare, tagged, or canonical.
pub fn classify(reference: &Reference) -> ReferenceKind {
    reference.kind()
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Bare(name) => write!(f, "{name}"),
            Reference::Tagged { name, tag } => write!(f, "{name}:{tag}"),
            Reference::Canonical {
                name,
                tag: Some(tag),
                digest,
            } => write!(f, "{name}:{tag}@{digest}"),
            Reference::Canonical {
                name,
                tag: None,
                digest,
            } => write!(f, "{name}@{digest}"),
        }
    }
}

impl FromStr for Reference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

impl TryFrom<String> for Reference {
    type Error = ReferenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        crate::parser::parse(&s)
    }
}

impl From<Reference> for String {
    fn from(reference: Reference) -> Self {
        reference.to_string()
    }
}
