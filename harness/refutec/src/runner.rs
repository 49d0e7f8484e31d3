//! Harness execution engine.
//!
//! Discovers manifests, probes the toolchain once, then checks every
//! fixture: materialize source → compile → match → record exactly one
//! verdict. Manifests run in parallel with rayon; fixtures within a
//! manifest run in declaration order.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use thiserror::Error;

use refute_compile::{CompileError, Toolchain};
use refute_diagnostic::match_fixture;
use refute_fixture::{discover_manifests_in, Manifest};

use crate::result::{FixtureOutcome, FixtureResult, ManifestSummary, RunSummary};
use crate::xfail::XFailSet;

/// A fault that aborts the whole run.
///
/// Expectation mismatches never show up here; they are recorded
/// per-fixture in the summaries. Only "cannot run fixtures at all"
/// conditions are fatal: an empty repository, an uninvocable compiler,
/// or scratch-file I/O faults.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no fixture manifests found under {path} (a run needs at least one fixtures.toml)")]
    NoFixtures { path: PathBuf },

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Configuration for the harness runner.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Filter fixtures by id pattern (substring match).
    pub filter: Option<String>,
    /// Enable verbose output.
    pub verbose: bool,
    /// Run manifests in parallel.
    pub parallel: bool,
    /// Compiler program override; wins over manifest overrides.
    pub compiler: Option<PathBuf>,
    /// Per-invocation timeout override; wins over manifest overrides.
    pub timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            filter: None,
            verbose: false,
            parallel: true,
            compiler: None,
            timeout: None,
        }
    }
}

/// Harness runner.
///
/// Holds only the run configuration: all fixture state is read-only after
/// manifest parsing, so parallel manifest checks share nothing mutable.
pub struct HarnessRunner {
    config: RunnerConfig,
}

impl HarnessRunner {
    /// Create a runner with default config.
    pub fn new() -> Self {
        HarnessRunner {
            config: RunnerConfig::default(),
        }
    }

    /// Create a runner with custom config.
    pub fn with_config(config: RunnerConfig) -> Self {
        HarnessRunner { config }
    }

    /// The toolchain a run will probe: built-in defaults plus CLI
    /// overrides, before any per-manifest overrides apply.
    pub fn base_toolchain(&self) -> Toolchain {
        let mut toolchain = Toolchain::default();
        if let Some(program) = &self.config.compiler {
            toolchain.program = program.clone();
        }
        if let Some(timeout) = self.config.timeout {
            toolchain.timeout = timeout;
        }
        toolchain
    }

    /// Run all fixtures under a path (manifest file or directory).
    pub fn run(&self, path: &Path) -> Result<RunSummary, HarnessError> {
        let manifests = discover_manifests_in(path);
        if manifests.is_empty() {
            return Err(HarnessError::NoFixtures {
                path: path.to_path_buf(),
            });
        }

        // Probe once so an uninvocable compiler aborts before any fixture
        // runs, rather than failing all of them one by one.
        let base = self.base_toolchain();
        base.probe()?;

        let xfail_root = if path.is_file() {
            path.parent().unwrap_or_else(|| Path::new("."))
        } else {
            path
        };
        let xfail = XFailSet::load(xfail_root, &base.name());
        if !xfail.is_empty() {
            tracing::debug!(toolchain = %base.name(), "loaded expected-failure list");
        }

        let start = Instant::now();

        // Scoped pool so worker threads are cleaned up before returning;
        // falls back to sequential if the pool can't be built.
        let summaries: Result<Vec<ManifestSummary>, HarnessError> =
            if self.config.parallel && manifests.len() > 1 {
                rayon::ThreadPoolBuilder::new()
                    .build_scoped(rayon::ThreadBuilder::run, |pool| {
                        pool.install(|| {
                            manifests
                                .par_iter()
                                .map(|manifest| self.run_manifest(manifest, &xfail))
                                .collect()
                        })
                    })
                    .unwrap_or_else(|e| {
                        tracing::warn!("failed to create thread pool ({e}), running sequentially");
                        manifests
                            .iter()
                            .map(|manifest| self.run_manifest(manifest, &xfail))
                            .collect()
                    })
            } else {
                manifests
                    .iter()
                    .map(|manifest| self.run_manifest(manifest, &xfail))
                    .collect()
            };

        let mut summary = RunSummary::new();
        for manifest_summary in summaries? {
            summary.add_manifest(manifest_summary);
        }
        summary.duration = start.elapsed();
        Ok(summary)
    }

    /// Check every fixture in one manifest.
    ///
    /// Manifest load failures are recorded on the summary and do not abort
    /// the run; compile-level faults propagate and do.
    fn run_manifest(
        &self,
        path: &Path,
        xfail: &XFailSet,
    ) -> Result<ManifestSummary, HarnessError> {
        let mut summary = ManifestSummary::new(path.to_path_buf());

        let manifest = match Manifest::load(path) {
            Ok(manifest) => manifest,
            Err(e) => {
                summary.add_error(e.to_string());
                return Ok(summary);
            }
        };

        let toolchain = self.effective_toolchain(&manifest);
        let dir = manifest.dir();

        for fixture in &manifest.fixtures {
            // Apply filter if set
            if let Some(filter) = &self.config.filter {
                if !fixture.id.contains(filter.as_str()) {
                    continue;
                }
            }

            if let Some(reason) = &fixture.skip {
                summary.add_result(FixtureResult::skipped(fixture.id.clone(), reason.clone()));
                continue;
            }

            let started = Instant::now();

            // An unreadable sidecar source is this fixture's failure, not
            // the run's: every fixture yields exactly one verdict.
            let source = match fixture.source_text(dir) {
                Ok(source) => source,
                Err(e) => {
                    summary.add_result(FixtureResult::failed(
                        fixture.id.clone(),
                        e.to_string(),
                        started.elapsed(),
                    ));
                    continue;
                }
            };

            let compiled = toolchain.compile_str(&fixture.id, &source)?;
            let verdict = match_fixture(fixture.expect, fixture.contains.as_deref(), &compiled);

            let outcome = match (verdict.passed, xfail.is_expected_failure(&fixture.id)) {
                (true, false) => FixtureOutcome::Passed,
                (true, true) => {
                    tracing::warn!(
                        fixture = %fixture.id,
                        "expected failure passed; remove the stale xfail entry"
                    );
                    FixtureOutcome::UnexpectedPass
                }
                (false, true) => {
                    FixtureOutcome::ExpectedFailure(verdict.explanation.unwrap_or_default())
                }
                (false, false) => FixtureOutcome::Failed(verdict.explanation.unwrap_or_default()),
            };

            summary.add_result(FixtureResult {
                id: fixture.id.clone(),
                outcome,
                duration: started.elapsed(),
            });
        }

        Ok(summary)
    }

    /// Resolve the toolchain for one manifest.
    ///
    /// Precedence: built-in defaults < manifest `[toolchain]` < CLI flags.
    fn effective_toolchain(&self, manifest: &Manifest) -> Toolchain {
        let mut toolchain = Toolchain::default();

        if let Some(spec) = &manifest.toolchain {
            if let Some(compiler) = &spec.compiler {
                toolchain.program = compiler.clone();
            }
            if let Some(args) = &spec.args {
                toolchain.args = args.clone();
            }
            if let Some(secs) = spec.timeout_secs {
                toolchain.timeout = Duration::from_secs(secs.max(1));
            }
        }
        if let Some(suffix) = &manifest.suffix {
            toolchain.suffix = suffix.clone();
        }

        if let Some(program) = &self.config.compiler {
            toolchain.program = program.clone();
        }
        if let Some(timeout) = self.config.timeout {
            toolchain.timeout = timeout;
        }

        toolchain
    }
}

impl Default for HarnessRunner {
    fn default() -> Self {
        HarnessRunner::new()
    }
}
