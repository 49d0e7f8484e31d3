//! The `check` command: validate manifests without invoking any compiler.

use std::path::Path;

use refute_fixture::{discover_manifests_in, Manifest};

/// Validate every manifest under a path: TOML shape, category names, id
/// rules, and that sidecar source files resolve.
pub fn check_fixtures(path: &str) {
    let path = Path::new(path);

    let manifests = discover_manifests_in(path);
    if manifests.is_empty() {
        eprintln!("no fixture manifests found under {}", path.display());
        std::process::exit(2);
    }

    let mut problems = 0;

    for manifest_path in &manifests {
        match Manifest::load(manifest_path) {
            Ok(manifest) => {
                let mut manifest_ok = true;
                for fixture in &manifest.fixtures {
                    if let Err(e) = fixture.source_text(manifest.dir()) {
                        problems += 1;
                        manifest_ok = false;
                        println!("FAIL: {e}");
                    }
                }
                if manifest_ok {
                    println!(
                        "OK: {} ({} fixtures)",
                        manifest_path.display(),
                        manifest.fixtures.len()
                    );
                }
            }
            Err(e) => {
                problems += 1;
                println!("FAIL: {e}");
            }
        }
    }

    std::process::exit(i32::from(problems > 0));
}
