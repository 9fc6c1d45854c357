/// Counters reported by a successful run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MirrorSummary {
    pub(crate) files_copied: u64,
    pub(crate) dirs_created: u64,
    pub(crate) entries_removed: u64,
}

impl MirrorSummary {
    /// Number of files copied into the destination tree.
    #[must_use]
    pub const fn files_copied(&self) -> u64 {
        self.files_copied
    }

    /// Number of destination directories created.
    #[must_use]
    pub const fn dirs_created(&self) -> u64 {
        self.dirs_created
    }

    /// Number of entries removed while clearing the destination.
    #[must_use]
    pub const fn entries_removed(&self) -> u64 {
        self.entries_removed
    }
}
