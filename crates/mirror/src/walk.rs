use std::ffi::OsString;
use std::fs;
use std::path::Path;

use filters::is_hidden_name;
use ledger::CreationLedger;
use logging::MessageSink;
use naming::{canonical_artifact_name, is_artifact_name, is_cache_dir_name, is_source_name};

use crate::MirrorError;
use crate::config::MirrorConfig;
use crate::summary::MirrorSummary;

/// One directory entry, keeping the raw name for filesystem joins and its
/// lossy rendering for pattern matching and classification.
struct LevelEntry {
    raw: OsString,
    name: String,
    is_dir: bool,
}

/// Mirrors one directory level and recurses into eligible subdirectories.
///
/// Per level: ensure the destination directory exists, filter the entry
/// lists, copy eligible files, then handle subdirectories (artifact caches
/// flatten into the current destination, everything else recurses).
pub(crate) fn mirror_tree(
    config: &MirrorConfig,
    source_dir: &Path,
    dest_dir: &Path,
    ledger: &mut CreationLedger,
    sink: &mut dyn MessageSink,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    // Covers a hidden walk root; deeper hidden directories never get here
    // because the level filter drops them before recursion.
    if config.hide_hidden() && dir_name_is_hidden(source_dir) {
        return Ok(());
    }

    ensure_directory(dest_dir, ledger, summary)?;

    let (dirs, files) = read_level(config, source_dir)?;

    for entry in &files {
        let source = source_dir.join(&entry.raw);

        // Three independent checks: a single file may trigger more than one
        // copy. The include-listed original runs last so it wins collisions.
        if is_artifact_name(&entry.name) {
            let canonical = canonical_artifact_name(&entry.name);
            let dest = dest_dir.join(canonical.as_ref());
            copy_file(&source, &dest, ledger, sink, summary)?;
        }

        if config.copy_all() && !is_source_name(&entry.name) {
            let dest = dest_dir.join(&entry.raw);
            copy_file(&source, &dest, ledger, sink, summary)?;
        }

        if is_source_name(&entry.name) && config.filters().matches_include_path(&source) {
            let dest = dest_dir.join(&entry.raw);
            copy_file(&source, &dest, ledger, sink, summary)?;
        }
    }

    for entry in &dirs {
        let source = source_dir.join(&entry.raw);
        if is_cache_dir_name(&entry.name) {
            // Cache contents flatten into the parent of the would-be nested
            // cache directory, which is the current destination level.
            copy_cache_contents(&source, dest_dir, ledger, sink, summary)?;
        } else {
            let dest = dest_dir.join(&entry.raw);
            mirror_tree(config, &source, &dest, ledger, sink, summary)?;
        }
    }

    Ok(())
}

/// Reads and filters one level, returning (directories, files) sorted by name.
fn read_level(
    config: &MirrorConfig,
    source_dir: &Path,
) -> Result<(Vec<LevelEntry>, Vec<LevelEntry>), MirrorError> {
    let read_dir = fs::read_dir(source_dir).map_err(|source| MirrorError::ReadDir {
        path: source_dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| MirrorError::ReadDir {
            path: source_dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| MirrorError::Inspect {
            path: entry.path(),
            source,
        })?;
        let raw = entry.file_name();
        entries.push(LevelEntry {
            name: raw.to_string_lossy().into_owned(),
            raw,
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort_by(|a, b| a.raw.cmp(&b.raw));

    let (dirs, files) = entries
        .into_iter()
        .filter(|entry| config.filters().allows_entry(&entry.name, config.hide_hidden()))
        .partition(|entry| entry.is_dir);
    Ok((dirs, files))
}

/// Copies every regular file in a cache directory into `dest_dir`,
/// canonicalizing each name.
fn copy_cache_contents(
    cache_dir: &Path,
    dest_dir: &Path,
    ledger: &mut CreationLedger,
    sink: &mut dyn MessageSink,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    let read_dir = fs::read_dir(cache_dir).map_err(|source| MirrorError::ReadDir {
        path: cache_dir.to_path_buf(),
        source,
    })?;

    let mut names: Vec<OsString> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| MirrorError::ReadDir {
            path: cache_dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| MirrorError::Inspect {
            path: entry.path(),
            source,
        })?;
        if file_type.is_file() {
            names.push(entry.file_name());
        }
    }
    names.sort();

    for raw in names {
        let source = cache_dir.join(&raw);
        let name = raw.to_string_lossy();
        let dest = dest_dir.join(canonical_artifact_name(&name).as_ref());
        copy_file(&source, &dest, ledger, sink, summary)?;
    }
    Ok(())
}

fn ensure_directory(
    dir: &Path,
    ledger: &mut CreationLedger,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir(dir).map_err(|source| MirrorError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    ledger.record(dir.to_path_buf());
    summary.dirs_created += 1;
    Ok(())
}

/// Copies `source` over `dest`, overwriting silently, and records the
/// destination path whether it was new or replaced.
fn copy_file(
    source: &Path,
    dest: &Path,
    ledger: &mut CreationLedger,
    sink: &mut dyn MessageSink,
    summary: &mut MirrorSummary,
) -> Result<(), MirrorError> {
    fs::copy(source, dest).map_err(|io_source| MirrorError::Copy {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: io_source,
    })?;
    ledger.record(dest.to_path_buf());
    summary.files_copied += 1;
    sink.copied(source, dest);
    Ok(())
}

fn dir_name_is_hidden(dir: &Path) -> bool {
    dir.file_name()
        .map(|name| is_hidden_name(&name.to_string_lossy()))
        .unwrap_or(false)
}
