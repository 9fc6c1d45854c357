#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `compile` is the boundary between the mirroring engine and the actual
//! byte-compilation step. The engine only ever asks one thing of it:
//! "compile this source tree; artifacts appear in per-directory
//! `__pycache__` caches". The [`BytecodeCompiler`] trait captures that
//! contract, [`CompileallCompiler`] fulfils it by shelling out to
//! `python -m compileall`, and tests substitute their own implementations
//! that stage artifacts directly or fail on purpose.
//!
//! The crate also hosts [`clean_artifact_caches`], the pre-compile sweep
//! that deletes stale `.pyc` files from cache directories so a forced
//! rebuild starts from a clean slate.

mod cleaner;
mod compiler;
mod error;

pub use cleaner::clean_artifact_caches;
pub use compiler::{BytecodeCompiler, CompileallCompiler};
pub use error::{CleanError, CompileError};
