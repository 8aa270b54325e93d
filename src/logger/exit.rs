//! Process termination for panic and fatal lines.

/// Exit status used by panic, fatal and unrecoverable write failures.
pub const EXIT_FAILURE: i32 = 1;

/// Ends the process.
pub trait ProcessExit: Send + Sync {
    fn exit(&self, code: i32) -> !;
}

/// Calls [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdExit;

impl ProcessExit for StdExit {
    fn exit(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}
