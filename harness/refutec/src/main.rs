//! refute CLI
//!
//! Negative-compile fixture harness: verifies that deliberately-invalid
//! source fails to compile with the expected diagnostic.

use std::path::PathBuf;
use std::time::Duration;

use refutec::commands::{check_fixtures, explain_category, list_fixtures, run_fixtures};
use refutec::runner::RunnerConfig;
use refutec::trace::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            // Parse args: path is optional, flags can come before or after
            let mut path: Option<String> = None;
            let mut config = RunnerConfig::default();

            for arg in args.iter().skip(2) {
                if let Some(filter) = arg.strip_prefix("--filter=") {
                    config.filter = Some(filter.to_string());
                } else if arg == "--verbose" || arg == "-v" {
                    config.verbose = true;
                } else if arg == "--no-parallel" {
                    config.parallel = false;
                } else if let Some(compiler) = arg.strip_prefix("--compiler=") {
                    config.compiler = Some(PathBuf::from(compiler));
                } else if let Some(secs) = arg.strip_prefix("--timeout=") {
                    match secs.parse::<u64>() {
                        Ok(secs) if secs > 0 => {
                            config.timeout = Some(Duration::from_secs(secs));
                        }
                        _ => {
                            eprintln!("error: invalid --timeout value '{secs}' (whole seconds)");
                            std::process::exit(1);
                        }
                    }
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.clone());
                }
            }

            // Use provided path or current directory
            let path = path.unwrap_or_else(|| ".".to_string());
            run_fixtures(&path, &config);
        }
        "list" => {
            let path = args
                .iter()
                .skip(2)
                .find(|a| !a.starts_with('-'))
                .cloned()
                .unwrap_or_else(|| ".".to_string());
            list_fixtures(&path);
        }
        "check" => {
            let path = args
                .iter()
                .skip(2)
                .find(|a| !a.starts_with('-'))
                .cloned()
                .unwrap_or_else(|| ".".to_string());
            check_fixtures(&path);
        }
        "explain" | "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: refute explain <category>");
                eprintln!("Example: refute explain use-of-deleted-function");
                std::process::exit(1);
            }
            explain_category(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("refute {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("refute - negative-compile fixture harness");
    println!();
    println!("Usage: refute <command> [options]");
    println!();
    println!("Commands:");
    println!("  run [path]           Compile every fixture, verify each fails as declared");
    println!("  list [path]          Enumerate fixtures without compiling");
    println!("  check [path]         Validate manifests (no compiler needed)");
    println!("  explain <category>   Explain a diagnostic category and its patterns");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --filter=<pattern>   Only run fixtures whose id matches pattern");
    println!("  --verbose, -v        Show detailed output");
    println!("  --no-parallel        Run manifests sequentially");
    println!("  --compiler=<prog>    Compiler to invoke (default: c++)");
    println!("  --timeout=<secs>     Per-fixture compiler deadline (default: 30)");
    println!();
    println!("Exit codes (run):");
    println!("  0  every fixture failed to compile with its expected diagnostic");
    println!("  1  expectation mismatches or manifest errors");
    println!("  2  no fixtures found, or the compiler could not be invoked");
    println!();
    println!("Examples:");
    println!("  refute run fixtures/");
    println!("  refute run fixtures/cpp/fixtures.toml --compiler=clang++");
    println!("  refute run --filter=deleted -v");
    println!("  refute check fixtures/");
    println!("  refute explain template-deduction-failure");
}
