//! Toolchain configuration and the compile call itself.

use std::fs::File;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::CompileError;
use crate::result::CompilationResult;

/// Default flag set.
///
/// `-fsyntax-only` keeps every fixture a pure frontend check (no linking,
/// no object files). `-Werror=return-type` promotes implicit fallthrough
/// in a non-void function to a hard error on both GCC and Clang, so the
/// missing-return-value category is deterministic across toolchains.
pub const DEFAULT_ARGS: &[&str] = &["-std=c++17", "-fsyntax-only", "-Werror=return-type"];

/// Default scratch file suffix.
pub const DEFAULT_SUFFIX: &str = ".cpp";

/// Default per-invocation deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Poll interval while waiting for the compiler process.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// An external compiler plus the fixed flag set it is invoked with.
#[derive(Clone, Debug)]
pub struct Toolchain {
    /// Compiler program (name resolved via PATH, or an explicit path).
    pub program: PathBuf,
    /// Flags passed before the scratch file path.
    pub args: Vec<String>,
    /// Suffix for scratch files, so the compiler picks the right frontend.
    pub suffix: String,
    /// Deadline per invocation. One hung compiler must not stall the run.
    pub timeout: Duration,
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            program: PathBuf::from("c++"),
            args: DEFAULT_ARGS.iter().map(|s| (*s).to_string()).collect(),
            suffix: DEFAULT_SUFFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Toolchain {
    /// Short name of the compiler program, used to select the xfail file
    /// (`xfail-<name>.txt`).
    pub fn name(&self) -> String {
        self.program
            .file_stem()
            .map_or_else(|| "cc".to_string(), |s| s.to_string_lossy().into_owned())
    }

    /// The invocation rendered for reports, without the scratch file.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Check that the compiler can be invoked at all.
    ///
    /// Runs `<program> --version` and discards its output; only spawnability
    /// matters. Called once per run so a missing compiler aborts up front
    /// instead of failing every fixture.
    pub fn probe(&self) -> Result<(), CompileError> {
        Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|_| ())
            .map_err(|e| self.classify_spawn_error(e))
    }

    /// Compile one fixture's source text and capture the outcome.
    ///
    /// Writes `source` to `<id><suffix>` inside a scoped temp directory,
    /// invokes the compiler against it with combined stdout/stderr capture,
    /// and waits up to [`Toolchain::timeout`]. The temp directory is removed
    /// on all exit paths by its RAII guard. No retries: a hung or crashed
    /// compiler is reported verbatim in the result.
    pub fn compile_str(&self, id: &str, source: &str) -> Result<CompilationResult, CompileError> {
        let scratch = tempfile::Builder::new()
            .prefix("refute-")
            .tempdir()
            .map_err(|e| CompileError::Scratch {
                id: id.to_string(),
                source: e,
            })?;

        let unit = scratch.path().join(format!("{id}{}", self.suffix));
        std::fs::write(&unit, source).map_err(|e| CompileError::Scratch {
            id: id.to_string(),
            source: e,
        })?;

        // Combined capture: stdout and stderr share one file handle, so the
        // diagnostic text preserves the compiler's emission order and the
        // poll-wait below cannot deadlock on a full pipe.
        let capture_path = scratch.path().join("diagnostics.txt");
        let capture = File::create(&capture_path).map_err(|e| CompileError::Scratch {
            id: id.to_string(),
            source: e,
        })?;
        let capture_err = capture.try_clone().map_err(|e| CompileError::Scratch {
            id: id.to_string(),
            source: e,
        })?;

        let start = Instant::now();
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(&unit)
            .stdin(Stdio::null())
            .stdout(Stdio::from(capture))
            .stderr(Stdio::from(capture_err))
            .spawn()
            .map_err(|e| self.classify_spawn_error(e))?;

        let (exit_code, timed_out) = wait_with_deadline(&mut child, self.timeout)?;
        let duration = start.elapsed();

        let diagnostic_text = match std::fs::read(&capture_path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        };

        tracing::debug!(
            fixture = id,
            elapsed_ms = duration.as_secs_f64() * 1000.0,
            exit = ?exit_code,
            timed_out,
            "compiler finished"
        );

        Ok(CompilationResult {
            exit_code,
            diagnostic_text,
            timed_out,
            duration,
        })
    }

    fn classify_spawn_error(&self, e: std::io::Error) -> CompileError {
        let program = self.program.display().to_string();
        if e.kind() == std::io::ErrorKind::NotFound {
            CompileError::CompilerNotFound {
                program,
                message: e.to_string(),
            }
        } else {
            CompileError::Spawn { program, source: e }
        }
    }
}

/// Poll the child until it exits or the deadline passes.
///
/// At the deadline the child is killed and reaped; the caller sees
/// `timed_out = true` with whatever exit code the kill produced.
fn wait_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> Result<(Option<i32>, bool), CompileError> {
    let started = Instant::now();

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok((status.code(), false)),
            Ok(None) => {
                if started.elapsed() >= timeout {
                    let _ = child.kill();
                    let status = child
                        .wait()
                        .map_err(|source| CompileError::Wait { source })?;
                    return Ok((status.code(), true));
                }
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(source) => return Err(CompileError::Wait { source }),
        }
    }
}
