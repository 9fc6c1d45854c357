#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `naming` answers the two questions the mirroring engine keeps asking about
//! directory entries: what kind of entry is this (byte-compiled artifact,
//! compilable source, artifact cache directory), and what should a generated
//! artifact be called in the destination tree?
//!
//! CPython's `compileall` stages artifacts under `__pycache__` using names of
//! the form `stem.cpython-312.pyc`, embedding the interpreter tag between the
//! stem and the extension. The destination tree wants the canonical
//! `stem.pyc`, so [`canonical_artifact_name`] strips the tag while leaving
//! every other name untouched.
//!
//! # Invariants
//!
//! - [`canonical_artifact_name`] is idempotent: canonical names pass through
//!   unchanged, so applying it twice equals applying it once.
//! - Classification helpers are ASCII case-insensitive (`FOO.PYC` is an
//!   artifact), while tag stripping is case-sensitive and only rewrites names
//!   ending in a literal `.pyc`; an upper-cased artifact is copied under its
//!   original name.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// File name suffix identifying a byte-compiled artifact.
pub const ARTIFACT_SUFFIX: &str = ".pyc";

/// File name suffix identifying a compilable source file.
pub const SOURCE_SUFFIX: &str = ".py";

/// Reserved directory name used by the compile step to stage artifacts.
pub const CACHE_DIR_NAME: &str = "__pycache__";

/// Matches `stem(.tag)?.pyc`; the stem is the shortest prefix before the tag.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)(\..*)?(\.pyc)$").expect("tag pattern compiles"));

/// Returns `true` when `name` ends with the artifact suffix, ignoring ASCII case.
#[must_use]
pub fn is_artifact_name(name: &str) -> bool {
    has_suffix_ignore_case(name, ARTIFACT_SUFFIX)
}

/// Returns `true` when `name` ends with the source suffix, ignoring ASCII case.
#[must_use]
pub fn is_source_name(name: &str) -> bool {
    has_suffix_ignore_case(name, SOURCE_SUFFIX)
}

/// Returns `true` when `name` is the reserved artifact cache directory name.
#[must_use]
pub fn is_cache_dir_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(CACHE_DIR_NAME)
}

/// Derives the canonical destination name for a generated artifact.
///
/// `mod.cpython-312.pyc` becomes `mod.pyc`; names that do not match the
/// tagged-artifact shape are returned unchanged.
///
/// # Examples
///
/// ```
/// use naming::canonical_artifact_name;
///
/// assert_eq!(canonical_artifact_name("mod.cpython-312.pyc"), "mod.pyc");
/// assert_eq!(canonical_artifact_name("mod.pyc"), "mod.pyc");
/// assert_eq!(canonical_artifact_name("notes.txt"), "notes.txt");
/// ```
#[must_use]
pub fn canonical_artifact_name(name: &str) -> Cow<'_, str> {
    let Some(captures) = TAG_PATTERN.captures(name) else {
        return Cow::Borrowed(name);
    };
    if captures.get(2).is_none() {
        return Cow::Borrowed(name);
    }
    let stem = captures.get(1).map_or("", |m| m.as_str());
    Cow::Owned(format!("{stem}{ARTIFACT_SUFFIX}"))
}

fn has_suffix_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
