//! Fixture result types.

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a single fixture check.
///
/// Per-fixture state is the trivial sequence Pending → Running → terminal
/// outcome; only the terminal outcomes are recorded.
#[derive(Clone, Debug)]
pub enum FixtureOutcome {
    /// The compiler rejected the fixture with the expected diagnostic.
    Passed,
    /// Expectation mismatch, with a human-readable explanation.
    Failed(String),
    /// The fixture was parked via its manifest `skip` field.
    Skipped(String),
    /// Mismatch covered by an xfail entry; does not affect the exit code.
    ExpectedFailure(String),
    /// An xfail-listed fixture passed; the stale entry should be removed.
    UnexpectedPass,
}

impl FixtureOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, FixtureOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FixtureOutcome::Failed(_))
    }
}

/// Result of checking a single fixture.
#[derive(Clone, Debug)]
pub struct FixtureResult {
    /// Fixture id from the manifest.
    pub id: String,
    /// Terminal outcome.
    pub outcome: FixtureOutcome,
    /// Time spent on this fixture (scratch write + compile + match).
    pub duration: Duration,
}

impl FixtureResult {
    /// Create a passed result.
    pub fn passed(id: String, duration: Duration) -> Self {
        FixtureResult {
            id,
            outcome: FixtureOutcome::Passed,
            duration,
        }
    }

    /// Create a failed result.
    #[cold]
    pub fn failed(id: String, explanation: String, duration: Duration) -> Self {
        FixtureResult {
            id,
            outcome: FixtureOutcome::Failed(explanation),
            duration,
        }
    }

    /// Create a skipped result.
    #[cold]
    pub fn skipped(id: String, reason: String) -> Self {
        FixtureResult {
            id,
            outcome: FixtureOutcome::Skipped(reason),
            duration: Duration::ZERO,
        }
    }
}

/// Summary of fixture results for a single manifest.
#[derive(Clone, Debug, Default)]
pub struct ManifestSummary {
    /// Path to the manifest file.
    pub path: PathBuf,
    /// Individual fixture results, in manifest order.
    pub results: Vec<FixtureResult>,
    /// Number of fixtures that passed.
    pub passed: usize,
    /// Number of fixtures with an expectation mismatch.
    pub failed: usize,
    /// Number of fixtures parked via `skip`.
    pub skipped: usize,
    /// Mismatches covered by xfail entries.
    pub xfail: usize,
    /// Xfail-listed fixtures that passed anyway.
    pub xpass: usize,
    /// Total time for this manifest's fixtures.
    pub duration: Duration,
    /// Repository-level errors (unreadable or invalid manifest).
    pub errors: Vec<String>,
}

impl ManifestSummary {
    pub fn new(path: PathBuf) -> Self {
        ManifestSummary {
            path,
            ..Default::default()
        }
    }

    pub fn add_result(&mut self, result: FixtureResult) {
        match &result.outcome {
            FixtureOutcome::Passed => self.passed += 1,
            FixtureOutcome::Failed(_) => self.failed += 1,
            FixtureOutcome::Skipped(_) => self.skipped += 1,
            FixtureOutcome::ExpectedFailure(_) => self.xfail += 1,
            FixtureOutcome::UnexpectedPass => self.xpass += 1,
        }
        self.duration += result.duration;
        self.results.push(result);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.xfail + self.xpass
    }

    /// Real failures only: expected failures (xfail) do not count.
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || !self.errors.is_empty()
    }
}

/// Overall summary of a harness run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Results for each manifest.
    pub manifests: Vec<ManifestSummary>,
    /// Total fixtures passed.
    pub passed: usize,
    /// Total expectation mismatches.
    pub failed: usize,
    /// Total fixtures skipped.
    pub skipped: usize,
    /// Total expected failures.
    pub xfail: usize,
    /// Total unexpected passes.
    pub xpass: usize,
    /// Number of manifests that failed to load.
    pub error_manifests: usize,
    /// Wall-clock time for the whole run.
    pub duration: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        RunSummary::default()
    }

    pub fn add_manifest(&mut self, summary: ManifestSummary) {
        self.passed += summary.passed;
        self.failed += summary.failed;
        self.skipped += summary.skipped;
        self.xfail += summary.xfail;
        self.xpass += summary.xpass;
        if !summary.errors.is_empty() {
            self.error_manifests += 1;
        }
        self.manifests.push(summary);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.xfail + self.xpass
    }

    /// Returns true if any real mismatch or manifest error occurred.
    ///
    /// Expected failures (xfail) and unexpected passes (xpass) do not count.
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.error_manifests > 0
    }

    /// Get exit code: 0 = every fixture failed to compile as expected,
    /// 1 = mismatches or manifest errors, 2 = nothing ran at all.
    pub fn exit_code(&self) -> i32 {
        if self.total() == 0 && self.error_manifests == 0 {
            2
        } else {
            i32::from(self.has_failures())
        }
    }
}
