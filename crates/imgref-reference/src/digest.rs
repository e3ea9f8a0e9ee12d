//! Content digests in `<algorithm>:<hex>` form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReferenceError, Result};
use crate::grammar::{is_algorithm, is_encoded};

/// The SHA-256 algorithm identifier.
pub const SHA256: &str = "sha256";

/// An algorithm identifier paired with a hex-encoded hash value.
///
/// Only the syntax is checked. The hash length is not validated against the
/// algorithm and the digest is never computed here; callers supply it.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest {
    algorithm: String,
    encoded: String,
}

impl Digest {
    /// Parse a digest string such as `sha256:e3b0c442...`.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgref_reference::Digest;
    ///
    /// let digest = Digest::parse("sha256:deadbeef").unwrap();
    /// assert_eq!(digest.algorithm(), "sha256");
    /// assert_eq!(digest.encoded(), "deadbeef");
    /// assert!(Digest::parse("deadbeef").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let (algorithm, encoded) = s.split_once(':').ok_or_else(|| ReferenceError::InvalidDigest {
            digest: s.to_string(),
            reason: "missing ':' between algorithm and hex value".into(),
        })?;
        Self::new(algorithm, encoded).map_err(|e| match e {
            ReferenceError::InvalidDigest { reason, .. } => ReferenceError::InvalidDigest {
                digest: s.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Build a digest from its two halves, validating each.
    pub fn new(algorithm: &str, encoded: &str) -> Result<Self> {
        if !is_algorithm(algorithm) {
            return Err(ReferenceError::InvalidDigest {
                digest: format!("{algorithm}:{encoded}"),
                reason: format!("invalid algorithm {algorithm:?}"),
            });
        }
        if !is_encoded(encoded) {
            return Err(ReferenceError::InvalidDigest {
                digest: format!("{algorithm}:{encoded}"),
                reason: "hash value must be non-empty hex".into(),
            });
        }
        Ok(Self {
            algorithm: algorithm.to_string(),
            encoded: encoded.to_string(),
        })
    }

    /// A SHA-256 digest over the given hex value.
    pub fn sha256(encoded: &str) -> Result<Self> {
        Self::new(SHA256, encoded)
    }

    /// The algorithm identifier (e.g. `"sha256"`).
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The hex-encoded hash value.
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.encoded)
    }
}

impl FromStr for Digest {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Digest {
    type Error = ReferenceError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn parse_sha256() {
        let d = Digest::parse(&format!("sha256:{HEX}")).unwrap();
        assert_eq!(d.algorithm(), SHA256);
        assert_eq!(d.encoded(), HEX);
        assert_eq!(d.to_string(), format!("sha256:{HEX}"));
    }

    #[test]
    fn hash_length_is_not_checked() {
        assert!(Digest::parse("sha256:abc").is_ok());
        assert!(Digest::parse("sha512:00").is_ok());
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let d = Digest::parse("sha256:DEADBEEF").unwrap();
        assert_eq!(d.encoded(), "DEADBEEF");
    }

    #[test]
    fn reject_missing_separator() {
        let err = Digest::parse("sha256").unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidDigest { .. }));
    }

    #[test]
    fn reject_bad_algorithm() {
        assert!(Digest::parse(":abc").is_err());
        assert!(Digest::parse("1sha:abc").is_err());
        assert!(Digest::parse("sha 256:abc").is_err());
    }

    #[test]
    fn reject_bad_hex() {
        assert!(Digest::parse("sha256:").is_err());
        assert!(Digest::parse("sha256:xyz").is_err());
        assert!(Digest::parse("sha256:ab:cd").is_err());
    }

    #[test]
    fn error_carries_full_input() {
        match Digest::parse("sha256:zz").unwrap_err() {
            ReferenceError::InvalidDigest { digest, .. } => assert_eq!(digest, "sha256:zz"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sha256_constructor() {
        let d = Digest::sha256("aaaa").unwrap();
        assert_eq!(d.to_string(), "sha256:aaaa");
    }

    #[test]
    fn serde_roundtrip() {
        let d = Digest::sha256(HEX).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"sha256:{HEX}\""));
        let parsed: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<Digest>("\"nope\"").is_err());
    }
}
