//! Diagnostic matching for the refute harness.
//!
//! Given a fixture's expected category and the captured compiler output,
//! decides pass/fail and explains every failure. The matcher fails closed:
//! a compiler that accepts a negative fixture always fails the check, no
//! matter what the diagnostic text says.

mod explain;
mod matcher;
mod patterns;

pub use explain::explain;
pub use matcher::{match_fixture, Verdict};
pub use patterns::category_patterns;
