//! Reference grammar parser.

use crate::digest::Digest;
use crate::error::{ReferenceError, Result};
use crate::name::Name;
use crate::reference::Reference;
use crate::tag::Tag;

/// Parse an arbitrary string of the form `name[:tag][@digest]`.
///
/// The input is not trimmed. Any grammar violation is returned as a
/// [`ReferenceError`]; this function never panics.
///
/// # Examples
///
/// ```
/// use imgref_reference::{parse, ReferenceKind};
///
/// let r = parse("registry.example.com/app:v1").unwrap();
/// assert_eq!(r.kind(), ReferenceKind::Tagged);
/// assert_eq!(r.name().domain(), Some("registry.example.com"));
///
/// let r = parse("localhost:5000/app").unwrap();
/// assert_eq!(r.kind(), ReferenceKind::Bare);
///
/// assert!(parse("not a valid ref!!").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Reference> {
    if raw.is_empty() {
        return Err(ReferenceError::Empty);
    }

    let (remainder, digest) = match raw.rsplit_once('@') {
        Some((remainder, digest)) => (remainder, Some(Digest::parse(digest)?)),
        None => (raw, None),
    };

    // A colon only introduces a tag when nothing after it is a path separator;
    // otherwise it belongs to a registry port.
    let (name, tag) = match remainder.rfind(':') {
        Some(idx) if !remainder[idx..].contains('/') => {
            (&remainder[..idx], Some(Tag::parse(&remainder[idx + 1..])?))
        }
        _ => (remainder, None),
    };

    if name.is_empty() {
        return Err(ReferenceError::NameEmpty {
            input: raw.to_string(),
        });
    }

    let name = Name::parse(name)?;
    Ok(Reference::from_parts(name, tag, digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceKind;

    const HEX: &str = "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

    #[test]
    fn bare_name() {
        let r = parse("bare/name").unwrap();
        assert_eq!(r.kind(), ReferenceKind::Bare);
        assert_eq!(r.name().path(), "bare/name");
    }

    #[test]
    fn tagged_name() {
        let r = parse("app:1.0").unwrap();
        assert_eq!(r.kind(), ReferenceKind::Tagged);
        assert_eq!(r.tag().map(|t| t.as_str()), Some("1.0"));
    }

    #[test]
    fn digest_name() {
        let r = parse(&format!("registry.example.com/app@sha256:{HEX}")).unwrap();
        assert_eq!(r.kind(), ReferenceKind::Canonical);
        assert_eq!(r.digest().map(|d| d.encoded()), Some(HEX));
        assert!(r.tag().is_none());
    }

    #[test]
    fn tag_and_digest() {
        let raw = format!("registry.example.com/app:v1@sha256:{HEX}");
        let r = parse(&raw).unwrap();
        assert_eq!(r.kind(), ReferenceKind::Canonical);
        assert_eq!(r.tag().map(|t| t.as_str()), Some("v1"));
        assert_eq!(r.to_string(), raw);
    }

    #[test]
    fn port_is_not_a_tag() {
        let r = parse("localhost:5000/app").unwrap();
        assert_eq!(r.kind(), ReferenceKind::Bare);
        assert_eq!(r.name().domain(), Some("localhost:5000"));
    }

    #[test]
    fn port_and_tag() {
        let r = parse("localhost:5000/team/app:dev").unwrap();
        assert_eq!(r.name().domain(), Some("localhost:5000"));
        assert_eq!(r.name().path(), "team/app");
        assert_eq!(r.tag().map(|t| t.as_str()), Some("dev"));
    }

    #[test]
    fn port_and_digest() {
        let r = parse(&format!("myhost:5000/app@sha256:{HEX}")).unwrap();
        assert_eq!(r.name().domain(), Some("myhost:5000"));
        assert_eq!(r.kind(), ReferenceKind::Canonical);
    }

    #[test]
    fn host_with_trailing_colon_number_is_tag() {
        let r = parse("localhost:5000").unwrap();
        assert_eq!(r.name().path(), "localhost");
        assert_eq!(r.tag().map(|t| t.as_str()), Some("5000"));
    }

    #[test]
    fn reject_empty() {
        assert_eq!(parse(""), Err(ReferenceError::Empty));
    }

    #[test]
    fn reject_empty_name() {
        assert!(matches!(parse(":v1"), Err(ReferenceError::NameEmpty { .. })));
        assert!(matches!(
            parse(&format!("@sha256:{HEX}")),
            Err(ReferenceError::NameEmpty { .. })
        ));
    }

    #[test]
    fn reject_whitespace_and_punctuation() {
        assert!(parse("not a valid ref!!").is_err());
        assert!(parse(" app").is_err());
        assert!(parse("app ").is_err());
    }

    #[test]
    fn reject_bad_tag() {
        assert!(matches!(parse("app:"), Err(ReferenceError::InvalidTag { .. })));
        assert!(matches!(parse("app:-x"), Err(ReferenceError::InvalidTag { .. })));
        let long = format!("app:{}", "t".repeat(129));
        assert!(matches!(parse(&long), Err(ReferenceError::InvalidTag { .. })));
    }

    #[test]
    fn reject_bad_digest() {
        assert!(matches!(parse("app@sha256"), Err(ReferenceError::InvalidDigest { .. })));
        assert!(matches!(parse("app@sha256:xyz"), Err(ReferenceError::InvalidDigest { .. })));
        assert!(matches!(parse("app@"), Err(ReferenceError::InvalidDigest { .. })));
    }

    #[test]
    fn reject_multiple_at_signs() {
        assert!(parse(&format!("a@b@sha256:{HEX}")).is_err());
    }

    #[test]
    fn reject_uppercase_repository() {
        assert!(matches!(
            parse("Example/App:v1"),
            Err(ReferenceError::NameNotLowercase { .. })
        ));
    }

    #[test]
    fn parse_is_idempotent_on_rendering() {
        for raw in [
            "app",
            "team/app:v1",
            "registry.example.com/team/app:1.2.3",
            "localhost:5000/app@sha256:abc123",
            "[::1]:5000/app:dev",
        ] {
            let r = parse(raw).unwrap();
            assert_eq!(r.to_string(), raw);
            assert_eq!(parse(&r.to_string()).unwrap(), r);
        }
    }
}
