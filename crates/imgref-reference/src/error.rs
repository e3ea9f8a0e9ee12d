//! Error types for reference parsing.

use thiserror::Error;

/// Errors that can occur while parsing an image reference or one of its parts.
///
/// Every variant renders a human-readable reason through `Display`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    /// The input string was empty.
    #[error("invalid reference format: empty reference")]
    Empty,

    /// The repository name (the part before any tag or digest) was empty.
    #[error("invalid reference format: repository name must not be empty: {input:?}")]
    NameEmpty { input: String },

    /// The rendered repository name exceeds the maximum length.
    #[error("repository name must not be more than {max} characters (got {len})")]
    NameTooLong { len: usize, max: usize },

    /// The registry authority is malformed.
    #[error("invalid registry domain {domain:?}")]
    InvalidDomain { domain: String },

    /// A path component contains invalid characters or separators.
    #[error("invalid repository path component {component:?}")]
    InvalidPath { component: String },

    /// A path would render with a leading segment that re-parses as a registry.
    #[error("ambiguous repository path {path:?}: first segment looks like a registry domain")]
    AmbiguousPath { path: String },

    /// The repository name contains uppercase letters.
    #[error("invalid reference format: repository name must be lowercase: {name:?}")]
    NameNotLowercase { name: String },

    /// The tag is malformed or too long.
    #[error("invalid tag {tag:?}: {reason}")]
    InvalidTag { tag: String, reason: String },

    /// The digest does not match `<algorithm>:<hex>`.
    #[error("invalid digest {digest:?}: {reason}")]
    InvalidDigest { digest: String, reason: String },
}

/// Convenience type alias for reference operations.
pub type Result<T> = std::result::Result<T, ReferenceError>;
