#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` defines the injectable reporting seam between the mirroring
//! engine and whatever wants to observe it. The engine emits exactly two
//! kinds of progress events: a copy (`source --> destination`) and a
//! deletion (`remove: path`). The [`MessageSink`] trait carries them; the
//! CLI installs a [`ConsoleSink`] honoring quiet mode, and tests install a
//! [`MemorySink`] to assert on the event stream.
//!
//! Reporting is advisory: sink write failures are swallowed so a broken
//! pipe on stdout never turns a successful mirror into a rollback.

use std::io::Write;
use std::path::{Path, PathBuf};

/// Receiver for per-action progress events emitted by the engine.
pub trait MessageSink {
    /// Reports that `source` was copied to `dest`.
    fn copied(&mut self, source: &Path, dest: &Path);

    /// Reports that `path` was deleted.
    fn removed(&mut self, path: &Path);
}

/// Sink that renders events as console lines, one per action.
pub struct ConsoleSink<W> {
    writer: W,
    quiet: bool,
}

impl<W: Write> ConsoleSink<W> {
    /// Creates a console sink; `quiet` suppresses all output.
    pub fn new(writer: W, quiet: bool) -> Self {
        Self { writer, quiet }
    }
}

impl<W: Write> MessageSink for ConsoleSink<W> {
    fn copied(&mut self, source: &Path, dest: &Path) {
        if !self.quiet {
            let _ = writeln!(self.writer, "{} --> {}", source.display(), dest.display());
        }
    }

    fn removed(&mut self, path: &Path) {
        if !self.quiet {
            let _ = writeln!(self.writer, "remove: {}", path.display());
        }
    }
}

/// One recorded sink event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SinkEvent {
    /// A file copy from `source` to `dest`.
    Copied {
        /// Source path of the copy.
        source: PathBuf,
        /// Destination path of the copy.
        dest: PathBuf,
    },
    /// A deletion of `path`.
    Removed {
        /// Path that was deleted.
        path: PathBuf,
    },
}

/// Sink that records events in memory for inspection in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<SinkEvent>,
}

impl MemorySink {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Returns the destinations of all recorded copy events.
    #[must_use]
    pub fn copied_destinations(&self) -> Vec<&Path> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Copied { dest, .. } => Some(dest.as_path()),
                SinkEvent::Removed { .. } => None,
            })
            .collect()
    }

    /// Returns the paths of all recorded deletion events.
    #[must_use]
    pub fn removed_paths(&self) -> Vec<&Path> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Removed { path } => Some(path.as_path()),
                SinkEvent::Copied { .. } => None,
            })
            .collect()
    }
}

impl MessageSink for MemorySink {
    fn copied(&mut self, source: &Path, dest: &Path) {
        self.events.push(SinkEvent::Copied {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
        });
    }

    fn removed(&mut self, path: &Path) {
        self.events.push(SinkEvent::Removed {
            path: path.to_path_buf(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_sink_renders_one_line_per_action() {
        let mut buffer = Vec::new();
        {
            let mut sink = ConsoleSink::new(&mut buffer, false);
            sink.copied(Path::new("/src/a.pyc"), Path::new("/out/a.pyc"));
            sink.removed(Path::new("/out/stale"));
        }
        let rendered = String::from_utf8(buffer).expect("utf8");
        assert_eq!(rendered, "/src/a.pyc --> /out/a.pyc\nremove: /out/stale\n");
    }

    #[test]
    fn quiet_console_sink_emits_nothing() {
        let mut buffer = Vec::new();
        {
            let mut sink = ConsoleSink::new(&mut buffer, true);
            sink.copied(Path::new("a"), Path::new("b"));
            sink.removed(Path::new("c"));
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn memory_sink_records_in_emission_order() {
        let mut sink = MemorySink::new();
        sink.removed(Path::new("x"));
        sink.copied(Path::new("a"), Path::new("b"));

        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.removed_paths(), vec![Path::new("x")]);
        assert_eq!(sink.copied_destinations(), vec![Path::new("b")]);
    }
}
