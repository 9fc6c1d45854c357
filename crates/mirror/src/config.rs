use std::path::{Path, PathBuf};

use filters::FilterSet;

/// Immutable description of one mirroring run.
///
/// Built once by the front end from validated arguments and passed by
/// reference into the engine; the engine never mutates it.
#[derive(Debug)]
pub struct MirrorConfig {
    source: PathBuf,
    dest: PathBuf,
    filters: FilterSet,
    copy_all: bool,
    quiet: bool,
    clean_caches: bool,
    force_recompile: bool,
    preserve_dest: bool,
    hide_hidden: bool,
}

impl MirrorConfig {
    /// Creates a configuration for mirroring `source` into `dest`.
    ///
    /// Both paths should already be absolute; the front end resolves and
    /// validates them before the engine ever touches the filesystem.
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            filters: FilterSet::default(),
            copy_all: false,
            quiet: false,
            clean_caches: false,
            force_recompile: false,
            preserve_dest: false,
            hide_hidden: true,
        }
    }

    /// Installs the compiled include/exclude rules.
    #[must_use]
    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Copies non-source files verbatim alongside artifacts.
    #[must_use]
    pub const fn with_copy_all(mut self, copy_all: bool) -> Self {
        self.copy_all = copy_all;
        self
    }

    /// Suppresses per-action reporting and compiler chatter.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Deletes cached artifacts under the source before compiling.
    #[must_use]
    pub const fn with_clean_caches(mut self, clean: bool) -> Self {
        self.clean_caches = clean;
        self
    }

    /// Recompiles even when up-to-date artifacts exist.
    #[must_use]
    pub const fn with_force_recompile(mut self, force: bool) -> Self {
        self.force_recompile = force;
        self
    }

    /// Keeps pre-existing destination contents instead of clearing them.
    #[must_use]
    pub const fn with_preserve_dest(mut self, preserve: bool) -> Self {
        self.preserve_dest = preserve;
        self
    }

    /// Controls hidden-entry suppression (enabled by default).
    #[must_use]
    pub const fn with_hide_hidden(mut self, hide: bool) -> Self {
        self.hide_hidden = hide;
        self
    }

    /// Returns the source tree root.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the destination root.
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Returns the compiled filter rules.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Returns whether non-source files are copied verbatim.
    #[must_use]
    pub const fn copy_all(&self) -> bool {
        self.copy_all
    }

    /// Returns whether reporting is suppressed.
    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    /// Returns whether artifact caches are cleaned before compiling.
    #[must_use]
    pub const fn clean_caches(&self) -> bool {
        self.clean_caches
    }

    /// Returns whether recompilation is forced.
    #[must_use]
    pub const fn force_recompile(&self) -> bool {
        self.force_recompile
    }

    /// Returns whether pre-existing destination contents are preserved.
    #[must_use]
    pub const fn preserve_dest(&self) -> bool {
        self.preserve_dest
    }

    /// Returns whether hidden entries are suppressed.
    #[must_use]
    pub const fn hide_hidden(&self) -> bool {
        self.hide_hidden
    }

    /// Returns the directory the source tree is mirrored into.
    ///
    /// The mirrored tree lands under `dest/<source basename>` so several
    /// source trees can share one destination root.
    #[must_use]
    pub fn mirror_root(&self) -> PathBuf {
        match self.source.file_name() {
            Some(name) => self.dest.join(name),
            None => self.dest.clone(),
        }
    }
}
