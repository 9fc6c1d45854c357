#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the thin command-line front end for `pycmirror`. It recognises
//! the option surface, validates the source and destination paths before
//! anything touches the filesystem, compiles the semicolon-separated regex
//! lists into a [`filters::FilterSet`], and hands an immutable
//! [`mirror::MirrorConfig`] to the engine together with the real
//! `compileall`-backed compiler and a console sink.
//!
//! # Design
//!
//! [`run`] accepts an argument iterator plus output handles, mirroring how
//! the binary wires `main`; tests call it with in-memory buffers. Argument
//! parsing is a hand-built [`clap`] command. Validation failures are
//! reported as `pycmirror: error: ...` lines on stderr with the syntax exit
//! code and no cleanup, because nothing has been created yet.
//!
//! # Errors
//!
//! - Usage and validation errors exit with [`ExitCode::Syntax`].
//! - Engine failures exit with [`ExitCode::Run`]; by then the engine has
//!   already rolled back, and any rollback leftovers are printed as
//!   warnings after the primary error.

mod exit_code;

pub use exit_code::{ExitCode, exit_code_from};

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser, error::ErrorKind};
use compile::CompileallCompiler;
use filters::{FilterRule, FilterSet};
use logging::ConsoleSink;
use mirror::MirrorConfig;

/// Destination used when `--dest` is not given.
const DEFAULT_DEST: &str = "./pycmirror_output/";

/// Builds the clap command describing the option surface.
fn command() -> Command {
    Command::new("pycmirror")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Batch-compile a Python tree and mirror the artifacts into a destination tree")
        .arg(
            Arg::new("src")
                .value_name("SRC")
                .required(true)
                .value_parser(OsStringValueParser::new())
                .help("Source directory to compile"),
        )
        .arg(
            Arg::new("dest")
                .short('d')
                .long("dest")
                .value_name("DIR")
                .default_value(DEFAULT_DEST)
                .value_parser(OsStringValueParser::new())
                .help("Directory the mirrored tree is written into"),
        )
        .arg(
            Arg::new("all-files")
                .short('a')
                .long("all-files")
                .action(ArgAction::SetTrue)
                .help("Copy non-source files (everything but *.py) to the destination"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only report errors"),
        )
        .arg(
            Arg::new("clean")
                .short('c')
                .long("clean")
                .action(ArgAction::SetTrue)
                .help("Delete cached *.pyc files under SRC before compiling"),
        )
        .arg(
            Arg::new("force")
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Recompile even when an up-to-date artifact exists"),
        )
        .arg(
            Arg::new("originals")
                .short('o')
                .long("originals")
                .value_name("LIST")
                .help("Semicolon-separated regexes selecting source files to copy verbatim"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .value_name("LIST")
                .help("Semicolon-separated regexes; matching files and directories are skipped"),
        )
        .arg(
            Arg::new("preserve-dest")
                .short('r')
                .long("preserve-dest")
                .action(ArgAction::SetTrue)
                .help("Keep existing destination contents instead of clearing them"),
        )
        .arg(
            Arg::new("no-hiding")
                .short('n')
                .long("no-hiding")
                .action(ArgAction::SetTrue)
                .help("Also process hidden entries (names starting with '.')"),
        )
}

/// Parses arguments, validates them, and executes one mirroring run.
///
/// Returns the process exit status; diagnostics go to `stderr`, progress
/// lines to `stdout`.
pub fn run<Args, Out, ErrOut>(args: Args, stdout: &mut Out, stderr: &mut ErrOut) -> i32
where
    Args: IntoIterator,
    Args::Item: Into<OsString> + Clone,
    Out: Write,
    ErrOut: Write,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(error) => {
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(stdout, "{error}");
                    ExitCode::Ok.as_i32()
                }
                _ => {
                    let _ = write!(stderr, "{error}");
                    ExitCode::Syntax.as_i32()
                }
            };
        }
    };

    let src_arg = matches
        .get_one::<OsString>("src")
        .cloned()
        .unwrap_or_default();
    let dest_arg = matches
        .get_one::<OsString>("dest")
        .cloned()
        .unwrap_or_else(|| OsString::from(DEFAULT_DEST));

    let (source, dest) = match validate_paths(&src_arg, &dest_arg) {
        Ok(paths) => paths,
        Err(message) => return syntax_error(stderr, &message),
    };

    let rules = collect_rules(
        matches.get_one::<String>("originals").map(String::as_str),
        matches.get_one::<String>("exclude").map(String::as_str),
    );
    let filter_set = match FilterSet::from_rules(rules) {
        Ok(set) => set,
        Err(error) => return syntax_error(stderr, &error.to_string()),
    };

    let quiet = matches.get_flag("quiet");
    let config = MirrorConfig::new(source, dest)
        .with_filters(filter_set)
        .with_copy_all(matches.get_flag("all-files"))
        .with_quiet(quiet)
        .with_clean_caches(matches.get_flag("clean"))
        .with_force_recompile(matches.get_flag("force"))
        .with_preserve_dest(matches.get_flag("preserve-dest"))
        .with_hide_hidden(!matches.get_flag("no-hiding"));

    let compiler = CompileallCompiler::new();
    let mut sink = ConsoleSink::new(&mut *stdout, quiet);

    match mirror::run(&config, &compiler, &mut sink) {
        Ok(_summary) => ExitCode::Ok.as_i32(),
        Err(error) => {
            let _ = writeln!(stderr, "pycmirror: error: {error}");
            for failure in error.rollback().failures() {
                let _ = writeln!(stderr, "pycmirror: warning: {failure}");
            }
            ExitCode::Run.as_i32()
        }
    }
}

fn syntax_error<W: Write>(stderr: &mut W, message: &str) -> i32 {
    let _ = writeln!(stderr, "pycmirror: error: {message}");
    ExitCode::Syntax.as_i32()
}

/// Resolves and validates the source/destination pair.
///
/// The source must exist as a directory and the destination must not be
/// nested inside it. Both are returned as normalized absolute paths.
fn validate_paths(src: &OsString, dest: &OsString) -> Result<(PathBuf, PathBuf), String> {
    let source = absolutize(Path::new(src))
        .map_err(|error| format!("cannot resolve source path: {error}"))?;
    match fs::metadata(&source) {
        Ok(metadata) if metadata.is_dir() => {}
        _ => {
            return Err(format!(
                "source '{}' does not exist as a directory",
                source.display()
            ));
        }
    }

    let dest = absolutize(Path::new(dest))
        .map_err(|error| format!("cannot resolve destination path: {error}"))?;
    if dest.starts_with(&source) {
        return Err(format!(
            "destination '{}' lies inside source '{}'",
            dest.display(),
            source.display()
        ));
    }

    Ok((source, dest))
}

/// Joins relative paths onto the working directory and removes `.`/`..`
/// components lexically, so the nesting check compares like with like.
fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Splits a semicolon-separated pattern list, trimming and dropping blanks.
fn split_patterns(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

fn collect_rules(originals: Option<&str>, excludes: Option<&str>) -> Vec<FilterRule> {
    let mut rules = Vec::new();
    if let Some(list) = excludes {
        rules.extend(split_patterns(list).into_iter().map(FilterRule::exclude));
    }
    if let Some(list) = originals {
        rules.extend(split_patterns(list).into_iter().map(FilterRule::include));
    }
    rules
}

#[cfg(test)]
mod tests;
