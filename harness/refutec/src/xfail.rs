//! Expected failure (XFAIL) tracking for toolchain-specific fixture gaps.
//!
//! Loads a list of fixtures expected to mismatch for a given toolchain,
//! e.g. a compiler that still demotes a pinned category to a warning.
//! Matching mismatches become "expected failure" (no exit code impact).
//! Unexpected passes (XPASS) produce warnings so stale entries get removed.

use std::path::Path;

use rustc_hash::FxHashSet;

/// Set of fixture ids expected to mismatch for a specific toolchain.
#[derive(Debug)]
pub struct XFailSet {
    fixtures: FxHashSet<String>,
}

impl XFailSet {
    /// Create an empty set (no expected failures).
    pub fn empty() -> Self {
        XFailSet {
            fixtures: FxHashSet::default(),
        }
    }

    /// Load expected failures from `xfail-{toolchain}.txt`.
    ///
    /// Searches `fixture_root` and its ancestors for the xfail file, so
    /// running `refute run fixtures/cpp` still finds `xfail-c++.txt` at the
    /// repository root.
    ///
    /// If the file doesn't exist, returns an empty set.
    ///
    /// Format:
    /// - Lines starting with `#` are comments
    /// - Blank lines are ignored
    /// - `fixture:id` marks a fixture expected to mismatch on this toolchain
    pub fn load(fixture_root: &Path, toolchain: &str) -> Self {
        let filename = format!("xfail-{toolchain}.txt");

        // Walk up from fixture_root to find the xfail file
        let mut dir = Some(fixture_root);
        while let Some(d) = dir {
            let path = d.join(&filename);
            if let Ok(content) = std::fs::read_to_string(&path) {
                return Self::parse(&content);
            }
            dir = d.parent();
        }

        Self::empty()
    }

    /// Parse xfail file content.
    fn parse(content: &str) -> Self {
        let mut fixtures = FxHashSet::default();

        for line in content.lines() {
            let trimmed = line.trim();

            // Skip comments and blank lines
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(id) = trimmed.strip_prefix("fixture:") {
                let id = id.trim();
                if !id.is_empty() {
                    fixtures.insert(id.to_string());
                }
            }
            // Unknown prefixes are silently ignored (forward compatible)
        }

        XFailSet { fixtures }
    }

    /// Check if a fixture id is expected to mismatch.
    pub fn is_expected_failure(&self, id: &str) -> bool {
        self.fixtures.contains(id)
    }

    /// Returns true if this set has no expected failures.
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_failures() {
        let set = XFailSet::empty();
        assert!(!set.is_expected_failure("anything"));
        assert!(set.is_empty());
    }

    #[test]
    fn parse_fixture_entries() {
        let content = "fixture:missing-return\nfixture:overload-mismatch\n";
        let set = XFailSet::parse(content);
        assert!(set.is_expected_failure("missing-return"));
        assert!(set.is_expected_failure("overload-mismatch"));
        assert!(!set.is_expected_failure("missing-semicolon"));
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let content = "\
# msvc still warns here
fixture:missing-return

# another comment

fixture:template-deduction
";
        let set = XFailSet::parse(content);
        assert!(set.is_expected_failure("missing-return"));
        assert!(set.is_expected_failure("template-deduction"));
        assert!(!set.is_empty());
    }

    #[test]
    fn parse_trims_whitespace() {
        let content = "  fixture:padded-id  \n";
        let set = XFailSet::parse(content);
        assert!(set.is_expected_failure("padded-id"));
    }

    #[test]
    fn parse_ignores_unknown_prefixes() {
        let content = "unknown:something\nfixture:valid\n";
        let set = XFailSet::parse(content);
        assert!(set.is_expected_failure("valid"));
        // No panic or error for unknown prefix
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let set = XFailSet::load(Path::new("/nonexistent"), "c++");
        assert!(set.is_empty());
    }

    #[test]
    fn load_walks_up_to_find_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("fixtures").join("cpp");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            dir.path().join("xfail-fakecc.txt"),
            "fixture:missing-return\n",
        )
        .unwrap();

        let set = XFailSet::load(&nested, "fakecc");
        assert!(set.is_expected_failure("missing-return"));
    }
}
