use std::fs;
use std::io;
use std::path::Path;

use filters::is_hidden_name;
use logging::MessageSink;
use naming::{is_artifact_name, is_cache_dir_name};

use crate::CleanError;

/// Deletes every stale `.pyc` inside `__pycache__` directories under `root`.
///
/// Cache directories themselves are left in place; only their artifact files
/// are removed, each reported through `sink`. Hidden entries are skipped
/// entirely when `hide_hidden` is set, including whole hidden branches.
pub fn clean_artifact_caches(
    root: &Path,
    hide_hidden: bool,
    sink: &mut dyn MessageSink,
) -> Result<(), CleanError> {
    if hide_hidden && dir_name_is_hidden(root) {
        return Ok(());
    }

    let entries = fs::read_dir(root).map_err(|source| CleanError {
        path: root.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CleanError {
            path: root.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if hide_hidden && is_hidden_name(&name) {
            continue;
        }
        let path = entry.path();
        let file_type = entry.file_type().map_err(|source| CleanError {
            path: path.clone(),
            source,
        })?;
        if !file_type.is_dir() {
            continue;
        }
        if is_cache_dir_name(&name) {
            clean_one_cache(&path, hide_hidden, sink)?;
        } else {
            clean_artifact_caches(&path, hide_hidden, sink)?;
        }
    }
    Ok(())
}

fn clean_one_cache(
    cache: &Path,
    hide_hidden: bool,
    sink: &mut dyn MessageSink,
) -> Result<(), CleanError> {
    let entries = fs::read_dir(cache).map_err(|source| CleanError {
        path: cache.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| CleanError {
            path: cache.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if hide_hidden && is_hidden_name(&name) {
            continue;
        }
        if !is_artifact_name(&name) {
            continue;
        }
        let path = entry.path();
        match fs::remove_file(&path) {
            Ok(()) => sink.removed(&path),
            Err(source) if source.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(CleanError { path, source }),
        }
    }
    Ok(())
}

fn dir_name_is_hidden(dir: &Path) -> bool {
    dir.file_name()
        .map(|name| is_hidden_name(&name.to_string_lossy()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::MemorySink;

    fn touch(path: &Path) {
        fs::write(path, b"x").expect("write fixture");
    }

    #[test]
    fn removes_only_artifacts_inside_caches() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = dir.path().join("__pycache__");
        fs::create_dir(&cache).expect("cache");
        touch(&cache.join("mod.cpython-312.pyc"));
        touch(&cache.join("notes.txt"));
        touch(&dir.path().join("stray.pyc"));

        let mut sink = MemorySink::new();
        clean_artifact_caches(dir.path(), true, &mut sink).expect("clean");

        assert!(!cache.join("mod.cpython-312.pyc").exists());
        assert!(cache.join("notes.txt").exists());
        // Artifacts outside cache directories are not the cleaner's business.
        assert!(dir.path().join("stray.pyc").exists());
        assert_eq!(sink.removed_paths().len(), 1);
    }

    #[test]
    fn descends_into_nested_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("pkg").join("__pycache__");
        fs::create_dir_all(&nested).expect("nested");
        touch(&nested.join("mod.cpython-312.pyc"));

        let mut sink = MemorySink::new();
        clean_artifact_caches(dir.path(), true, &mut sink).expect("clean");
        assert!(!nested.join("mod.cpython-312.pyc").exists());
    }

    #[test]
    fn hidden_branches_are_skipped_when_hiding() {
        let dir = tempfile::tempdir().expect("tempdir");
        let hidden_cache = dir.path().join(".venv").join("__pycache__");
        fs::create_dir_all(&hidden_cache).expect("hidden cache");
        touch(&hidden_cache.join("mod.cpython-312.pyc"));

        let mut sink = MemorySink::new();
        clean_artifact_caches(dir.path(), true, &mut sink).expect("clean");
        assert!(hidden_cache.join("mod.cpython-312.pyc").exists());

        clean_artifact_caches(dir.path(), false, &mut sink).expect("clean unhidden");
        assert!(!hidden_cache.join("mod.cpython-312.pyc").exists());
    }
}
