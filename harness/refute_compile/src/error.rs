//! Harness-level faults while invoking the compiler.

use thiserror::Error;

/// A fault that prevents the harness from exercising a fixture at all.
///
/// These abort the whole run. Expectation mismatches (wrong diagnostic,
/// unexpected success, timeout, crash) are not errors here; they live in
/// the [`crate::CompilationResult`] and are judged by the matcher.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("compiler '{program}' not found: {message}")]
    CompilerNotFound { program: String, message: String },

    #[error("failed to prepare scratch file for fixture '{id}': {source}")]
    Scratch {
        id: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn compiler '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for compiler process: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
    },
}
