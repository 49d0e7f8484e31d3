//! The outcome of one compiler invocation.

use std::time::Duration;

/// What one compiler invocation produced.
#[derive(Clone, Debug)]
pub struct CompilationResult {
    /// Process exit code. `None` when the process died without one
    /// (killed at the timeout deadline, or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Combined stdout + stderr of the compiler, in emission order.
    pub diagnostic_text: String,
    /// The process hit the per-invocation deadline and was killed.
    pub timed_out: bool,
    /// Wall-clock time for the invocation.
    pub duration: Duration,
}

impl CompilationResult {
    /// The compiler accepted the fixture.
    ///
    /// For a negative fixture this is itself the defect under test.
    pub fn compiler_succeeded(&self) -> bool {
        self.exit_code == Some(0) && !self.timed_out
    }
}
