use std::fs;
use std::io;
use std::path::Path;

use ledger::CreationLedger;
use logging::MessageSink;

use crate::MirrorError;
use crate::summary::MirrorSummary;

/// Deletes the destination tree bottom-up, then the root itself.
///
/// Files go first, directories once they are empty. A missing destination is
/// a no-op. Every deletion is reported through `sink`.
pub(crate) fn clear_destination(
    dest: &Path,
    sink: &mut dyn MessageSink,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    match fs::symlink_metadata(dest) {
        Ok(metadata) if metadata.is_dir() => remove_tree(dest, sink, summary),
        Ok(_) => remove_entry(dest, false, sink, summary),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(MirrorError::Inspect {
            path: dest.to_path_buf(),
            source,
        }),
    }
}

fn remove_tree(
    dir: &Path,
    sink: &mut dyn MessageSink,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    let entries = fs::read_dir(dir).map_err(|source| MirrorError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| MirrorError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| MirrorError::Inspect {
            path: path.clone(),
            source,
        })?;
        if file_type.is_dir() {
            remove_tree(&path, sink, summary)?;
        } else {
            remove_entry(&path, false, sink, summary)?;
        }
    }

    remove_entry(dir, true, sink, summary)
}

fn remove_entry(
    path: &Path,
    is_dir: bool,
    sink: &mut dyn MessageSink,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    let outcome = if is_dir {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };
    outcome.map_err(|source| MirrorError::Remove {
        path: path.to_path_buf(),
        source,
    })?;
    summary.entries_removed += 1;
    sink.removed(path);
    Ok(())
}

/// Recreates the destination directory chain component by component.
///
/// Only segments that do not already exist are created, each recorded in the
/// ledger so a failed run removes exactly what it added.
pub(crate) fn create_destination_chain(
    dest: &Path,
    ledger: &mut CreationLedger,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    let mut chain: Vec<&Path> = dest.ancestors().collect();
    chain.reverse();

    for segment in chain {
        if segment.as_os_str().is_empty() || segment.exists() {
            continue;
        }
        fs::create_dir(segment).map_err(|source| MirrorError::CreateDir {
            path: segment.to_path_buf(),
            source,
        })?;
        ledger.record(segment.to_path_buf());
        summary.dirs_created += 1;
    }
    Ok(())
}
