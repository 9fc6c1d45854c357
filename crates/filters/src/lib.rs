#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` provides ordered include/exclude pattern evaluation for the
//! `pycmirror` workspace. Patterns are regular expressions applied with
//! *search* semantics: a rule matches when its pattern occurs anywhere in the
//! candidate text, not only when it spans the whole string.
//!
//! Two independent decisions are served:
//!
//! - **Entry eligibility** ([`FilterSet::allows_entry`]): at each directory
//!   level the walker asks, per directory name and per file name, whether the
//!   entry should be processed at all. Hidden-entry suppression (names
//!   beginning with `.`) and the exclude rules both apply here, and they
//!   apply to directory names and file names independently.
//! - **Verbatim-copy gating** ([`FilterSet::matches_include_path`]): include
//!   rules are matched against the *full source path* of a compilable file to
//!   decide whether the uncompiled original is copied alongside its artifact.
//!
//! # Design
//!
//! - [`FilterRule`] captures the user-supplied action and pattern text; the
//!   heavy lifting happens when a [`FilterSet`] is constructed.
//! - [`FilterSet`] owns the compiled [`regex::Regex`] for each rule,
//!   partitioned by action. Rules are evaluated in definition order, and an
//!   entry is dropped as soon as any exclude rule matches.
//!
//! # Errors
//!
//! [`FilterSet::from_rules`] reports [`FilterError`] when a pattern fails to
//! compile. The error preserves the offending pattern and the underlying
//! [`regex::Error`] for diagnostics.
//!
//! # Examples
//!
//! ```
//! use filters::{FilterRule, FilterSet};
//!
//! let set = FilterSet::from_rules([FilterRule::exclude("vendor")]).expect("compiles");
//!
//! assert!(set.allows_entry("src", true));
//! assert!(!set.allows_entry("vendored_libs", true)); // search, not full match
//! assert!(!set.allows_entry(".git", true));
//! assert!(set.allows_entry(".git", false));
//! ```

mod action;
mod error;
mod hidden;
mod rule;
mod set;

pub use action::FilterAction;
pub use error::FilterError;
pub use hidden::is_hidden_name;
pub use rule::FilterRule;
pub use set::FilterSet;

#[cfg(test)]
mod tests;
