use std::path::Path;

use regex::Regex;

use crate::{FilterAction, FilterError, FilterRule, is_hidden_name};

/// Compiled, immutable collection of filter rules.
///
/// A `FilterSet` is built once from the ordered rule list supplied on the
/// command line and then queried per directory level. Exclude rules govern
/// which entries the walker processes; include rules gate which compilable
/// source files are copied verbatim.
///
/// Each rule's outcome is independent of every other entry's: filtering one
/// name never changes the decision for another.
#[derive(Debug, Default)]
pub struct FilterSet {
    includes: Vec<Regex>,
    excludes: Vec<Regex>,
}

impl FilterSet {
    /// Builds a [`FilterSet`] from the supplied rules.
    ///
    /// Rules are compiled in iteration order and partitioned by action.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if any rule's pattern is not a valid regular
    /// expression.
    pub fn from_rules<I>(rules: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = FilterRule>,
    {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();

        for rule in rules {
            let compiled = Regex::new(&rule.pattern)
                .map_err(|source| FilterError::new(rule.pattern.clone(), source))?;
            match rule.action {
                FilterAction::Include => includes.push(compiled),
                FilterAction::Exclude => excludes.push(compiled),
            }
        }

        Ok(Self { includes, excludes })
    }

    /// Returns `true` if the set contains no compiled rules of any kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Returns `true` when any exclude pattern occurs in `name`.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excludes.iter().any(|pattern| pattern.is_match(name))
    }

    /// Decides whether a directory entry named `name` should be processed.
    ///
    /// Hidden-entry suppression is applied first when `hide_hidden` is set;
    /// the exclude rules apply regardless of that flag. The caller applies
    /// this check to directory names and file names independently, so a
    /// suppressed directory is never descended into.
    #[must_use]
    pub fn allows_entry(&self, name: &str, hide_hidden: bool) -> bool {
        if hide_hidden && is_hidden_name(name) {
            return false;
        }
        !self.is_excluded(name)
    }

    /// Returns `true` when any include pattern occurs in `path`.
    ///
    /// Include rules match the full source path, not just the file name, so
    /// a pattern such as `pkg/.*/cli\.py` can select one file among several
    /// sharing a stem.
    #[must_use]
    pub fn matches_include_path(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.includes.iter().any(|pattern| pattern.is_match(&text))
    }
}
