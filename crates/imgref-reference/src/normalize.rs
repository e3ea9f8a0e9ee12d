//! Opt-in registry normalization for familiar (Docker Hub style) names.
//!
//! Nothing in the parser or resolver normalizes by default; callers that
//! want `nginx` to mean `docker.io/library/nginx` ask for it explicitly.

use crate::error::Result;
use crate::grammar::looks_like_domain;
use crate::name::Name;
use crate::parser::parse;
use crate::reference::Reference;
use crate::tag::Tag;

/// Registry assumed for names without a domain.
pub const DEFAULT_DOMAIN: &str = "docker.io";

/// Legacy alias rewritten to [`DEFAULT_DOMAIN`].
pub const LEGACY_DEFAULT_DOMAIN: &str = "index.docker.io";

/// Namespace for single-segment repositories on the default registry.
pub const OFFICIAL_REPO_PREFIX: &str = "library/";

/// Expand a name to its fully-qualified form.
///
/// # Examples
///
/// ```
/// use imgref_reference::{normalize_name, Name};
///
/// let name = normalize_name(&Name::parse("nginx").unwrap()).unwrap();
/// assert_eq!(name.to_string(), "docker.io/library/nginx");
/// ```
pub fn normalize_name(name: &Name) -> Result<Name> {
    let domain = match name.domain() {
        None | Some(LEGACY_DEFAULT_DOMAIN) => DEFAULT_DOMAIN,
        Some(domain) => domain,
    };
    if domain == DEFAULT_DOMAIN && !name.path().contains('/') {
        Name::new(Some(domain), &format!("{OFFICIAL_REPO_PREFIX}{}", name.path()))
    } else {
        Name::new(Some(domain), name.path())
    }
}

/// Shorten a name to the form users usually type.
///
/// The default domain is dropped unless the remaining path would then read
/// as a registry, and the `library/` namespace is dropped for single-segment
/// official repositories.
pub fn familiar_name(name: &Name) -> Result<Name> {
    let on_default = matches!(name.domain(), Some(DEFAULT_DOMAIN | LEGACY_DEFAULT_DOMAIN));
    if !on_default {
        return Ok(name.clone());
    }

    let path = match name.path().strip_prefix(OFFICIAL_REPO_PREFIX) {
        Some(rest) if !rest.contains('/') => rest,
        _ => name.path(),
    };
    let first = path.split('/').next().unwrap_or_default();
    if path.contains('/') && looks_like_domain(first) {
        return Name::new(Some(DEFAULT_DOMAIN), path);
    }
    Name::new(None, path)
}

/// Apply [`normalize_name`] to a reference, keeping its tag and digest.
pub fn normalize(reference: &Reference) -> Result<Reference> {
    let name = normalize_name(reference.name())?;
    Ok(Reference::from_parts(
        name,
        reference.tag().cloned(),
        reference.digest().cloned(),
    ))
}

/// Apply [`familiar_name`] to a reference, keeping its tag and digest.
pub fn familiar(reference: &Reference) -> Result<Reference> {
    let name = familiar_name(reference.name())?;
    Ok(Reference::from_parts(
        name,
        reference.tag().cloned(),
        reference.digest().cloned(),
    ))
}

/// Give a bare reference the `latest` tag. Other shapes are returned as-is.
pub fn with_default_tag(reference: &Reference) -> Reference {
    match reference {
        Reference::Bare(name) => Reference::tagged(name.clone(), Tag::latest()),
        other => other.clone(),
    }
}

/// Parse then normalize.
pub fn parse_normalized(raw: &str) -> Result<Reference> {
    normalize(&parse(raw)?)
}
