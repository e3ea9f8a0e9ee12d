//! Container image reference parsing and classification.
//!
//! This crate turns arbitrary strings such as `registry.example.com/app:v1`
//! or `app@sha256:...` into structured [`Reference`] values, classifies them
//! by addressing mode, and renders the canonical tag- and digest-qualified
//! strings used for cataloging and pull/push operations.
//!
//! # Architecture
//!
//! - **Parsing** accepts `[domain/]path[:tag][@digest]`. The first path
//!   segment is a registry domain only when it contains `.` or `:`, or is
//!   `localhost`.
//! - **Classification** is fixed at parse time: a [`Reference`] is
//!   [`Reference::Bare`], [`Reference::Tagged`], or [`Reference::Canonical`].
//!   A digest always wins over a tag.
//! - **Batch resolution** splits many raw strings into tag and digest lists,
//!   dropping unparsable and bare inputs.
//! - **Synthesis** reconciles a parsed reference with a digest obtained from
//!   verified content.
//!
//! All operations are pure and hold no shared state.
//!
//! # Modules
//!
//! - [`error`] — [`ReferenceError`], the parse failure type
//! - [`digest`] — [`Digest`] (`algorithm:hex`)
//! - [`tag`] — [`Tag`]
//! - [`name`] — [`Name`] (domain + path)
//! - [`reference`] — [`Reference`] and [`ReferenceKind`]
//! - [`parser`] — [`parse`]
//! - [`normalize`] — opt-in Docker Hub style normalization
//! - [`resolve`] — [`resolve_all`] and [`repo_digest_and_tag`]

pub mod digest;
pub mod error;
mod grammar;
pub mod name;
pub mod normalize;
pub mod parser;
pub mod reference;
pub mod resolve;
pub mod tag;

pub use digest::{Digest, SHA256};
pub use error::{ReferenceError, Result};
pub use grammar::{NAME_TOTAL_LENGTH_MAX, TAG_MAX_LENGTH};
pub use name::Name;
pub use normalize::{
    familiar, familiar_name, normalize, normalize_name, parse_normalized, with_default_tag,
    DEFAULT_DOMAIN,
};
pub use parser::parse;
pub use reference::{classify, Reference, ReferenceKind};
pub use resolve::{
    canonical_forms, repo_digest_and_tag, resolve_all, resolve_all_with, DropReason, Dropped,
    RepoDigestAndTag, ResolveOptions, Resolved,
};
pub use tag::{Tag, DEFAULT_TAG};
