// src/exit_status.rs
//! Decoding of the child shell's wait status into our own exit code.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// Exit code used when the child neither exited nor was killed by a signal,
/// or when it could not be started at all.
pub const EXIT_UNKNOWN: i32 = 127;

/// Base added to the signal number for signal terminations, as shells do.
pub const SIGNAL_BASE: i32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    Signaled(i32),
    Other,
}

impl ChildExit {
    /// Decode a raw `waitpid(2)` status as reported by VTE's child-exited.
    pub fn from_wait_status(status: i32) -> Self {
        let status = ExitStatus::from_raw(status);
        if let Some(code) = status.code() {
            ChildExit::Exited(code)
        } else if let Some(signal) = status.signal() {
            ChildExit::Signaled(signal)
        } else {
            ChildExit::Other
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            ChildExit::Exited(code) => code,
            ChildExit::Signaled(signal) => SIGNAL_BASE + signal,
            ChildExit::Other => EXIT_UNKNOWN,
        }
    }
}
