use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced by the byte-compilation step.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The interpreter process could not be launched at all.
    #[error("failed to launch '{interpreter}': {source}")]
    Spawn {
        /// Interpreter the runner attempted to execute.
        interpreter: String,
        /// Underlying spawn failure.
        #[source]
        source: io::Error,
    },

    /// The interpreter ran but reported a compilation failure.
    #[error("byte-compilation failed: {status}")]
    Failed {
        /// Exit status reported by the interpreter.
        status: ExitStatus,
    },

    /// A test or adapter implementation failed for its own reasons.
    #[error("byte-compilation failed: {0}")]
    Other(String),
}

/// Error produced while sweeping stale artifacts out of cache directories.
#[derive(Debug, Error)]
#[error("failed to clean artifact cache entry '{path}': {source}")]
pub struct CleanError {
    /// Path the sweep was touching when the failure occurred.
    pub path: PathBuf,
    /// Underlying filesystem error.
    #[source]
    pub source: io::Error,
}
