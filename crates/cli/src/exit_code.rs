use std::process;

/// Exit codes reported by the `pycmirror` binary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,
    /// Invalid arguments or failed pre-run validation; nothing was mutated.
    Syntax = 1,
    /// The run failed after mutation started; rollback has already run.
    Run = 2,
}

impl ExitCode {
    /// Returns the numeric process exit status.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Converts a status returned by [`crate::run`] into a process exit code.
#[must_use]
pub fn exit_code_from(status: i32) -> process::ExitCode {
    let clamped = status.clamp(0, i32::from(u8::MAX));
    process::ExitCode::from(clamped as u8)
}
