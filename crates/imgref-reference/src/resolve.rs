//! Batch resolution of raw reference strings and canonical form synthesis.
//!
//! [`resolve_all`] keeps the lossy default: unparsable and bare entries are
//! dropped without surfacing an error. Callers that need to know what was
//! dropped use [`resolve_all_with`] and inspect each [`Dropped`] entry, or
//! read [`Resolved::dropped`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::digest::Digest;
use crate::error::ReferenceError;
use crate::normalize::normalize;
use crate::parser::parse;
use crate::reference::{Reference, ReferenceKind};

/// Options for batch resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Expand familiar names (e.g. `nginx` → `docker.io/library/nginx`)
    /// before rendering.
    pub normalize: bool,
}

/// The outcome of resolving a batch of references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    /// Tag-qualified references, in input order.
    pub tags: Vec<String>,
    /// Digest-qualified references, in input order.
    pub digests: Vec<String>,
    /// Number of inputs that contributed to neither list.
    pub dropped: usize,
}

/// Why an input was left out of both result lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropReason {
    /// The input did not match the reference grammar.
    Unparsable(ReferenceError),
    /// The input parsed but carried neither tag nor digest.
    Bare,
}

/// An input that [`resolve_all_with`] dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dropped {
    /// Position of the input in the batch.
    pub index: usize,
    /// The raw input string.
    pub input: String,
    pub reason: DropReason,
}

/// Split raw reference strings into tagged and canonical renderings.
///
/// # Examples
///
/// ```
/// use imgref_reference::resolve_all;
///
/// let resolved = resolve_all([
///     "registry.example.com/app:v1",
///     "not a valid ref!!",
///     "registry.example.com/app@sha256:deadbeef",
/// ]);
/// assert_eq!(resolved.tags, vec!["registry.example.com/app:v1"]);
/// assert_eq!(resolved.digests, vec!["registry.example.com/app@sha256:deadbeef"]);
/// ```
pub fn resolve_all<I, S>(raws: I) -> Resolved
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_all_with(raws, &ResolveOptions::default(), |_| {})
}

/// Like [`resolve_all`], reporting every dropped input to `on_drop`.
pub fn resolve_all_with<I, S, F>(raws: I, options: &ResolveOptions, mut on_drop: F) -> Resolved
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(Dropped),
{
    let mut resolved = Resolved::default();

    for (index, raw) in raws.into_iter().enumerate() {
        let raw = raw.as_ref();
        let parsed = if options.normalize {
            parse(raw).and_then(|r| normalize(&r))
        } else {
            parse(raw)
        };

        let reason = match parsed {
            Ok(reference) => match reference.kind() {
                ReferenceKind::Canonical => {
                    resolved.digests.push(reference.to_string());
                    continue;
                }
                ReferenceKind::Tagged => {
                    resolved.tags.push(reference.to_string());
                    continue;
                }
                ReferenceKind::Bare => {
                    debug!(index, input = raw, "dropping bare reference");
                    DropReason::Bare
                }
            },
            Err(err) => {
                debug!(index, input = raw, error = %err, "dropping unparsable reference");
                DropReason::Unparsable(err)
            }
        };

        resolved.dropped += 1;
        on_drop(Dropped {
            index,
            input: raw.to_string(),
            reason,
        });
    }

    debug!(
        tags = resolved.tags.len(),
        digests = resolved.digests.len(),
        dropped = resolved.dropped,
        "batch resolved"
    );
    resolved
}

/// Repo digest and repo tag renderings for one reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoDigestAndTag {
    /// `name@digest`, or the reference's own rendering if it is canonical.
    pub repo_digest: String,
    /// `name:tag`, or empty if the reference carries no tag.
    pub repo_tag: String,
}

/// Reconcile a parsed reference with a digest obtained elsewhere.
///
/// Returns `(repo_digest, repo_tag)`. A reference that already pins a digest
/// is rendered unchanged and `digest` is ignored; otherwise the repo digest
/// is `name@digest`.
///
/// # Examples
///
/// ```
/// use imgref_reference::{parse, repo_digest_and_tag, Digest};
///
/// let name = parse("example/app").unwrap();
/// let digest = Digest::parse("sha256:aaaa").unwrap();
/// let (repo_digest, repo_tag) = repo_digest_and_tag(&name, &digest);
/// assert_eq!(repo_digest, "example/app@sha256:aaaa");
/// assert_eq!(repo_tag, "");
/// ```
pub fn repo_digest_and_tag(reference: &Reference, digest: &Digest) -> (String, String) {
    let repo_tag = reference.tagged_string().unwrap_or_default();
    let repo_digest = match reference {
        Reference::Canonical { .. } => reference.to_string(),
        _ => format!("{}@{digest}", reference.name()),
    };
    (repo_digest, repo_tag)
}

/// [`repo_digest_and_tag`] as a serializable struct.
pub fn canonical_forms(reference: &Reference, digest: &Digest) -> RepoDigestAndTag {
    let (repo_digest, repo_tag) = repo_digest_and_tag(reference, digest);
    RepoDigestAndTag {
        repo_digest,
        repo_tag,
    }
}
