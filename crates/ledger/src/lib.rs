#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ledger` records every filesystem path a mirroring run creates or
//! overwrites, in chronological order, and undoes them all when the run
//! fails. The ledger is the only transactional mechanism in the workspace:
//! there is no journal on disk and no atomic rename, just the guarantee that
//! deleting the recorded paths in reverse creation order removes everything
//! the run produced.
//!
//! # Invariants
//!
//! - Paths are appended strictly in creation order, so the reverse walk
//!   deletes every file before the directory containing it becomes the
//!   deletion candidate.
//! - Rollback is best-effort: it never aborts early. Paths that have already
//!   vanished are treated as success; any other failure is collected into
//!   the [`RollbackReport`] for the caller to surface after the primary
//!   error.
//!
//! # Examples
//!
//! ```
//! use ledger::CreationLedger;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let created = dir.path().join("staging");
//! std::fs::create_dir(&created).unwrap();
//!
//! let mut ledger = CreationLedger::new();
//! ledger.record(created.clone());
//!
//! let report = ledger.rollback();
//! assert_eq!(report.removed(), 1);
//! assert!(report.failures().is_empty());
//! assert!(!created.exists());
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Append-only record of paths created or overwritten during a run.
#[derive(Debug, Default)]
pub struct CreationLedger {
    paths: Vec<PathBuf>,
}

impl CreationLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path` as the most recent filesystem mutation.
    pub fn record(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Returns the number of recorded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the recorded paths in creation order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Deletes every recorded path in reverse creation order.
    ///
    /// Files are removed with [`fs::remove_file`]; anything else is removed
    /// with [`fs::remove_dir`], which by the ledger's ordering invariant is
    /// empty by the time its turn comes. Paths that no longer exist count as
    /// already rolled back. Secondary failures are collected, never fatal.
    #[must_use = "the report carries rollback failures the caller should surface"]
    pub fn rollback(self) -> RollbackReport {
        let mut removed = 0;
        let mut failures = Vec::new();

        for path in self.paths.into_iter().rev() {
            match remove_recorded(&path) {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(source) => failures.push(RollbackFailure { path, source }),
            }
        }

        RollbackReport { removed, failures }
    }
}

/// Removes one recorded path; `Ok(false)` means it was already gone.
fn remove_recorded(path: &Path) -> io::Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(error) => return Err(error),
    };

    if metadata.is_dir() {
        fs::remove_dir(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}

/// Outcome of a [`CreationLedger::rollback`] sweep.
#[derive(Debug, Default)]
pub struct RollbackReport {
    removed: usize,
    failures: Vec<RollbackFailure>,
}

impl RollbackReport {
    /// Returns how many recorded paths were actually deleted.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Returns the secondary failures encountered during the sweep.
    #[must_use]
    pub fn failures(&self) -> &[RollbackFailure] {
        &self.failures
    }

    /// Returns `true` when every recorded path was removed or already gone.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A single path the rollback sweep could not remove.
#[derive(Debug)]
pub struct RollbackFailure {
    path: PathBuf,
    source: io::Error,
}

impl RollbackFailure {
    /// Returns the path that resisted removal.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for RollbackFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to roll back '{}': {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for RollbackFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
