use compile::{BytecodeCompiler, clean_artifact_caches};
use ledger::CreationLedger;
use logging::MessageSink;

use crate::config::MirrorConfig;
use crate::error::{MirrorError, RunError};
use crate::prepare::{clear_destination, create_destination_chain};
use crate::summary::MirrorSummary;
use crate::walk::mirror_tree;

/// Executes one full mirroring run.
///
/// Control flow: optional cache clean, destination clearing (unless
/// preserved), destination chain creation, compile step, then the recursive
/// mirror walk. All mutations are recorded in a fresh ledger; on any failure
/// the ledger is rolled back in reverse creation order and the primary error
/// is returned together with the rollback outcome.
///
/// # Errors
///
/// Returns [`RunError`] when any step fails. By the time the error is
/// returned the rollback sweep has already run.
pub fn run(
    config: &MirrorConfig,
    compiler: &dyn BytecodeCompiler,
    sink: &mut dyn MessageSink,
) -> Result<MirrorSummary, RunError> {
    let mut ledger = CreationLedger::new();
    let mut summary = MirrorSummary::default();

    match execute(config, compiler, sink, &mut ledger, &mut summary) {
        Ok(()) => Ok(summary),
        Err(error) => Err(RunError::new(error, ledger.rollback())),
    }
}

fn execute(
    config: &MirrorConfig,
    compiler: &dyn BytecodeCompiler,
    sink: &mut dyn MessageSink,
    ledger: &mut CreationLedger,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    if config.clean_caches() {
        clean_artifact_caches(config.source(), config.hide_hidden(), sink)?;
    }

    if !config.preserve_dest() {
        clear_destination(config.dest(), sink, summary)?;
    }
    create_destination_chain(config.dest(), ledger, summary)?;

    compiler.compile_tree(config.source(), config.force_recompile(), config.quiet())?;

    mirror_tree(
        config,
        config.source(),
        &config.mirror_root(),
        ledger,
        sink,
        summary,
    )
}
