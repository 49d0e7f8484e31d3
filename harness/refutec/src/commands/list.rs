//! The `list` command: enumerate fixtures without compiling anything.

use std::path::Path;

use refute_fixture::{discover_manifests_in, Manifest};

/// List every fixture under a path (manifest file or directory).
pub fn list_fixtures(path: &str) {
    let path = Path::new(path);

    let manifests = discover_manifests_in(path);
    if manifests.is_empty() {
        eprintln!("no fixture manifests found under {}", path.display());
        std::process::exit(2);
    }

    let mut total = 0;
    let mut errors = 0;

    for manifest_path in &manifests {
        match Manifest::load(manifest_path) {
            Ok(manifest) => {
                println!("{}", manifest_path.display());
                for fixture in &manifest.fixtures {
                    total += 1;
                    println!(
                        "  {} [{}] ({})",
                        fixture.id,
                        fixture.expect,
                        fixture.source_kind()
                    );
                }
            }
            Err(e) => {
                errors += 1;
                eprintln!("ERROR: {e}");
            }
        }
    }

    println!();
    println!("{} fixtures in {} manifests", total, manifests.len());
    std::process::exit(i32::from(errors > 0));
}
