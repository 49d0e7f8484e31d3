//! refute, a negative-compile fixture harness.
//!
//! Feeds deliberately-invalid source fixtures to an external compiler and
//! verifies each one fails with the diagnostic category its manifest
//! declares. The harness's own exit code is the reverse of "did the bad
//! code compile": 0 when every fixture failed the way it should.
//!
//! # Pipeline
//!
//! ```text
//! fixtures.toml (repository)
//!     │
//!     ▼
//! compile_str() ──► CompilationResult     one subprocess per fixture
//!     │
//!     ▼
//! match_fixture() ──► Verdict             fails closed on exit code 0
//!     │
//!     ▼
//! RunSummary ──► exit code 0 / 1 / 2
//! ```

pub mod commands;
pub mod result;
pub mod runner;
pub mod trace;
pub mod xfail;

// Re-exports for convenience
pub use result::{FixtureOutcome, FixtureResult, ManifestSummary, RunSummary};
pub use runner::{HarnessError, HarnessRunner, RunnerConfig};
pub use xfail::XFailSet;
