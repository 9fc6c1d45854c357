use std::fmt;
use std::io;
use std::path::PathBuf;

use compile::{CleanError, CompileError};
use ledger::RollbackReport;
use thiserror::Error;

/// Failure of a single mirroring operation.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Cleaning stale artifacts out of a cache directory failed.
    #[error(transparent)]
    Clean(#[from] CleanError),

    /// The compile step failed.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A directory could not be read.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        /// Directory whose contents could not be listed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// An entry's type could not be determined.
    #[error("failed to inspect '{path}': {source}")]
    Inspect {
        /// Entry whose metadata could not be read.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A destination directory could not be created.
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A file copy failed.
    #[error("failed to copy '{from}' to '{to}': {source}")]
    Copy {
        /// Source of the failed copy.
        from: PathBuf,
        /// Destination of the failed copy.
        to: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A destination entry could not be removed while clearing.
    #[error("failed to remove '{path}': {source}")]
    Remove {
        /// Entry that could not be removed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}

/// A failed run: the primary error plus the outcome of the rollback sweep.
#[derive(Debug)]
pub struct RunError {
    error: MirrorError,
    rollback: RollbackReport,
}

impl RunError {
    pub(crate) fn new(error: MirrorError, rollback: RollbackReport) -> Self {
        Self { error, rollback }
    }

    /// Returns the failure that triggered the rollback.
    #[must_use]
    pub fn error(&self) -> &MirrorError {
        &self.error
    }

    /// Returns the rollback outcome, including any secondary failures.
    #[must_use]
    pub fn rollback(&self) -> &RollbackReport {
        &self.rollback
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
