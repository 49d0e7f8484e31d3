//! Manifest discovery.
//!
//! Finds all fixture manifests in a given directory tree.
//! Convention: a manifest is a file named `fixtures.toml`.

use std::fs;
use std::path::{Path, PathBuf};

/// File name that marks a fixture manifest.
pub const MANIFEST_FILE_NAME: &str = "fixtures.toml";

/// Discover all manifests in a directory tree.
///
/// # Arguments
/// * `root` - Root directory to search
///
/// # Returns
/// Vector of manifest paths, sorted by path.
pub fn discover_manifests(root: &Path) -> Vec<PathBuf> {
    let mut manifests = Vec::new();
    discover_recursive(root, &mut manifests);
    manifests.sort();
    manifests
}

fn discover_recursive(dir: &Path, manifests: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        // Skip hidden files and directories
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            // Skip common non-source directories
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if matches!(name, "target" | "node_modules" | ".git" | "__pycache__") {
                    continue;
                }
            }
            discover_recursive(&path, manifests);
        } else if path
            .file_name()
            .is_some_and(|n| n == MANIFEST_FILE_NAME)
        {
            manifests.push(path);
        }
    }
}

/// Discover manifests at a specific file or directory.
///
/// If `path` is a `.toml` file, returns just that file (the manifest need
/// not be named `fixtures.toml` when named explicitly).
/// If `path` is a directory, discovers all `fixtures.toml` files recursively.
pub fn discover_manifests_in(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().is_some_and(|e| e == "toml") {
            vec![path.to_path_buf()]
        } else {
            vec![]
        }
    } else if path.is_dir() {
        discover_manifests(path)
    } else {
        vec![]
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
