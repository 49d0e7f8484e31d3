//! External-compiler invocation for the refute harness.
//!
//! The compiler is an opaque subprocess: one scratch directory, one process,
//! one bounded wait per fixture. Nothing here interprets diagnostics; that
//! is the matcher's job. A hung or crashed compiler is reported verbatim in
//! the [`CompilationResult`], never masked; only faults that prevent the
//! harness from invoking the compiler at all surface as [`CompileError`].

mod error;
mod result;
mod toolchain;

pub use error::CompileError;
pub use result::CompilationResult;
pub use toolchain::{Toolchain, DEFAULT_ARGS, DEFAULT_SUFFIX, DEFAULT_TIMEOUT};
