//! The `run` command: check every fixture, report results.

use std::path::Path;

use crate::result::{FixtureOutcome, RunSummary};
use crate::runner::{HarnessRunner, RunnerConfig};

/// Run fixtures at the given path with the provided configuration.
pub fn run_fixtures(path: &str, config: &RunnerConfig) {
    let path = Path::new(path);

    if !path.exists() {
        eprintln!("Path not found: {}", path.display());
        std::process::exit(2);
    }

    let runner = HarnessRunner::with_config(config.clone());

    if config.verbose {
        println!("Toolchain: {}", runner.base_toolchain().command_line());
    }

    match runner.run(path) {
        Ok(summary) => {
            print_run_summary(&summary, config.verbose);
            std::process::exit(summary.exit_code());
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}

/// Print a summary of fixture results, with optional verbose output.
fn print_run_summary(summary: &RunSummary, verbose: bool) {
    // Print manifest-by-manifest results
    for manifest in &summary.manifests {
        if manifest.total() == 0 && manifest.errors.is_empty() {
            continue;
        }

        // Print repository errors (unreadable or invalid manifests)
        if !manifest.errors.is_empty() {
            println!("\n{}", manifest.path.display());
            for error in &manifest.errors {
                println!("  ERROR: {error}");
            }
            continue;
        }

        if verbose || manifest.has_failures() {
            println!("\n{}", manifest.path.display());
        }

        for result in &manifest.results {
            let status = match &result.outcome {
                FixtureOutcome::Passed => {
                    if verbose {
                        format!("  PASS: {} ({:.2?})", result.id, result.duration)
                    } else {
                        continue;
                    }
                }
                FixtureOutcome::Failed(explanation) => {
                    format!("  FAIL: {} - {}", result.id, explanation)
                }
                FixtureOutcome::Skipped(reason) => {
                    if verbose {
                        format!("  SKIP: {} - {}", result.id, reason)
                    } else {
                        continue;
                    }
                }
                FixtureOutcome::ExpectedFailure(explanation) => {
                    if verbose {
                        format!("  XFAIL: {} - {}", result.id, explanation)
                    } else {
                        continue;
                    }
                }
                FixtureOutcome::UnexpectedPass => {
                    format!(
                        "  XPASS: {} - expected failure passed; remove the stale xfail entry",
                        result.id
                    )
                }
            };
            println!("{status}");
        }
    }

    // Print summary
    println!();
    println!("Fixture Summary:");
    println!(
        "  {} passed, {} failed, {} skipped ({} total)",
        summary.passed,
        summary.failed,
        summary.skipped,
        summary.total()
    );
    if summary.xfail > 0 || summary.xpass > 0 {
        println!(
            "  {} expected failures, {} unexpected passes",
            summary.xfail, summary.xpass
        );
    }
    println!("  Completed in {:.2?}", summary.duration);

    if summary.has_failures() {
        println!();
        println!("FAILED");
    } else if summary.total() == 0 {
        println!();
        println!("NO FIXTURES FOUND");
    } else {
        println!();
        println!("OK");
    }
}
