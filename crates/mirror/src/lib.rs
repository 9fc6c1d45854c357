#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `mirror` is the engine of the `pycmirror` workspace: it prepares the
//! destination, invokes the opaque compile step, and recursively mirrors the
//! source tree into the destination, copying byte-compiled artifacts under
//! their canonical names. Every directory and file the run creates or
//! overwrites is recorded in a [`ledger::CreationLedger`]; any failure rolls
//! the whole run back so no partial output survives.
//!
//! # Design
//!
//! - [`MirrorConfig`] is an immutable description of one run, built once by
//!   the front end and passed by reference. There is no ambient state.
//! - [`run`] owns the control flow: optional cache clean, destination
//!   clearing and chain creation, compile, then the per-level walk. On error
//!   it consumes the ledger, rolls back in reverse creation order, and
//!   returns a [`RunError`] pairing the primary failure with the
//!   [`ledger::RollbackReport`].
//! - The walker processes exactly one directory level per call; sub-levels
//!   are handled by recursion. Entry names are sorted per level so the walk
//!   order, and therefore overwrite tie-breaks, are deterministic.
//!
//! # Invariants
//!
//! - A destination directory exists before any file beneath it is written.
//! - Every mutation is recorded before the next one is attempted.
//! - A hidden or excluded directory contributes nothing to the destination,
//!   directly or transitively.
//!
//! # Examples
//!
//! ```no_run
//! use compile::CompileallCompiler;
//! use filters::FilterSet;
//! use logging::ConsoleSink;
//! use mirror::MirrorConfig;
//!
//! let config = MirrorConfig::new("/work/src", "/work/out")
//!     .with_filters(FilterSet::default())
//!     .with_copy_all(true);
//! let mut sink = ConsoleSink::new(std::io::stdout(), false);
//! let summary = mirror::run(&config, &CompileallCompiler::new(), &mut sink)?;
//! println!("copied {} files", summary.files_copied());
//! # Ok::<(), mirror::RunError>(())
//! ```

mod config;
mod error;
mod prepare;
mod run;
mod summary;
mod walk;

pub use config::MirrorConfig;
pub use error::{MirrorError, RunError};
pub use run::run;
pub use summary::MirrorSummary;
