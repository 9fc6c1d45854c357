use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use crate::CompileError;

/// Recursion cap forwarded to `compileall`.
const MAX_COMPILE_DEPTH: &str = "100";

/// Opaque compile step: populate artifact caches for a whole source tree.
///
/// Implementations compile every compilable file under `root`, staging one
/// artifact per file in the `__pycache__` directory next to it. The mirror
/// engine neither knows nor cares how the artifacts are produced.
pub trait BytecodeCompiler {
    /// Compiles the tree rooted at `root`.
    ///
    /// `force` recompiles even when an up-to-date artifact exists; `quiet`
    /// suppresses the compiler's own progress chatter.
    fn compile_tree(&self, root: &Path, force: bool, quiet: bool) -> Result<(), CompileError>;
}

/// [`BytecodeCompiler`] backed by `python -m compileall`.
#[derive(Clone, Debug)]
pub struct CompileallCompiler {
    interpreter: OsString,
}

impl CompileallCompiler {
    /// Creates a runner using the default `python3` interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interpreter: OsString::from("python3"),
        }
    }

    /// Overrides the interpreter binary.
    #[must_use]
    pub fn with_interpreter(mut self, interpreter: impl Into<OsString>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Returns the interpreter the runner will execute.
    #[must_use]
    pub fn interpreter(&self) -> &OsStr {
        &self.interpreter
    }

    fn command(&self, root: &Path, force: bool, quiet: bool) -> Command {
        let mut command = Command::new(&self.interpreter);
        command.arg("-m").arg("compileall").arg("-r").arg(MAX_COMPILE_DEPTH);
        if force {
            command.arg("-f");
        }
        if quiet {
            command.arg("-q");
        }
        command.arg(root);
        command
    }
}

impl Default for CompileallCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl BytecodeCompiler for CompileallCompiler {
    fn compile_tree(&self, root: &Path, force: bool, quiet: bool) -> Result<(), CompileError> {
        let status = self
            .command(root, force, quiet)
            .status()
            .map_err(|source| CompileError::Spawn {
                interpreter: self.interpreter.to_string_lossy().into_owned(),
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(CompileError::Failed { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn rendered_args(command: &Command) -> Vec<OsString> {
        command.get_args().map(OsString::from).collect()
    }

    #[test]
    fn command_line_carries_recursion_cap_and_root() {
        let runner = CompileallCompiler::new();
        let command = runner.command(Path::new("/work/src"), false, false);
        assert_eq!(command.get_program().to_string_lossy(), "python3");
        assert_eq!(
            rendered_args(&command),
            ["-m", "compileall", "-r", "100", "/work/src"]
                .map(OsString::from)
                .to_vec()
        );
    }

    #[test]
    fn force_and_quiet_flags_are_forwarded() {
        let runner = CompileallCompiler::new().with_interpreter("python3.12");
        let command = runner.command(Path::new("src"), true, true);
        assert_eq!(command.get_program().to_string_lossy(), "python3.12");
        assert_eq!(
            rendered_args(&command),
            ["-m", "compileall", "-r", "100", "-f", "-q", "src"]
                .map(OsString::from)
                .to_vec()
        );
    }

    #[test]
    fn missing_interpreter_reports_spawn_error() {
        let runner = CompileallCompiler::new().with_interpreter("definitely-not-a-python");
        let error = runner
            .compile_tree(Path::new("."), false, true)
            .expect_err("spawn should fail");
        match error {
            CompileError::Spawn { interpreter, .. } => {
                assert_eq!(interpreter, "definitely-not-a-python");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
