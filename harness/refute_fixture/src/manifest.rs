//! Manifest parsing and validation.
//!
//! A manifest (`fixtures.toml`) declares an ordered sequence of fixtures
//! plus optional toolchain overrides:
//!
//! ```toml
//! suffix = ".cpp"
//!
//! [toolchain]
//! compiler = "clang++"
//! timeout-secs = 10
//!
//! [[fixture]]
//! id = "missing-semicolon"
//! expect = "syntax-error"
//! file = "missing_semicolon.cpp"
//!
//! [[fixture]]
//! id = "pointer-from-int"
//! expect = "invalid-type-conversion"
//! source = '''
//! int* as_pointer() {
//!     int* p = 123;
//!     return p;
//! }
//! '''
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::category::CategoryId;
use crate::error::FixtureError;
use crate::fixture::{id_is_valid, Fixture, FixtureSource};

/// Optional per-manifest overrides for the compiler invocation.
///
/// Plain data: the compile crate owns the effective toolchain; this only
/// records what the manifest asked for.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainSpec {
    /// Compiler program to invoke instead of the default.
    pub compiler: Option<PathBuf>,
    /// Full replacement for the default flag set.
    pub args: Option<Vec<String>>,
    /// Per-invocation timeout in seconds.
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

/// A parsed, validated manifest: the ordered fixture sequence for one
/// directory, plus its overrides.
#[derive(Clone, Debug)]
pub struct Manifest {
    /// Path the manifest was loaded from.
    pub path: PathBuf,
    /// Fixtures in declaration order.
    pub fixtures: Vec<Fixture>,
    /// Scratch file suffix for this manifest's fixtures (default `.cpp`).
    pub suffix: Option<String>,
    /// Toolchain overrides, if any.
    pub toolchain: Option<ToolchainSpec>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    suffix: Option<String>,
    toolchain: Option<ToolchainSpec>,
    #[serde(default, rename = "fixture")]
    fixtures: Vec<RawFixture>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFixture {
    id: String,
    expect: String,
    source: Option<String>,
    file: Option<PathBuf>,
    contains: Option<String>,
    skip: Option<String>,
}

impl Manifest {
    /// Load and validate a manifest file.
    ///
    /// Validation covers: TOML shape, category names, id uniqueness and
    /// file-name safety, exactly-one-source rule, and non-emptiness.
    pub fn load(path: &Path) -> Result<Manifest, FixtureError> {
        let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &text)
    }

    /// Parse manifest text. Split from [`Manifest::load`] so tests can feed
    /// strings directly.
    pub fn parse(path: &Path, text: &str) -> Result<Manifest, FixtureError> {
        let raw: RawManifest = toml::from_str(text).map_err(|source| FixtureError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;

        if raw.fixtures.is_empty() {
            return Err(FixtureError::EmptyManifest {
                path: path.to_path_buf(),
            });
        }

        let mut fixtures = Vec::with_capacity(raw.fixtures.len());
        let mut seen = std::collections::HashSet::new();

        for raw_fixture in raw.fixtures {
            let RawFixture {
                id,
                expect,
                source,
                file,
                contains,
                skip,
            } = raw_fixture;

            if !id_is_valid(&id) {
                return Err(FixtureError::InvalidId {
                    path: path.to_path_buf(),
                    id,
                });
            }
            if !seen.insert(id.clone()) {
                return Err(FixtureError::DuplicateId {
                    path: path.to_path_buf(),
                    id,
                });
            }

            let expect: CategoryId =
                expect
                    .parse()
                    .map_err(|()| FixtureError::UnknownCategory {
                        path: path.to_path_buf(),
                        id: id.clone(),
                        value: expect,
                        valid: CategoryId::valid_set(),
                    })?;

            let source = match (source, file) {
                (Some(text), None) => FixtureSource::Inline(text),
                (None, Some(rel)) => FixtureSource::File(rel),
                _ => {
                    return Err(FixtureError::AmbiguousSource {
                        path: path.to_path_buf(),
                        id,
                    })
                }
            };

            fixtures.push(Fixture {
                id,
                source,
                expect,
                contains,
                skip,
            });
        }

        Ok(Manifest {
            path: path.to_path_buf(),
            fixtures,
            suffix: raw.suffix,
            toolchain: raw.toolchain,
        })
    }

    /// Directory that anchors this manifest's relative source paths.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<Manifest, FixtureError> {
        Manifest::parse(Path::new("fixtures.toml"), text)
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = parse(
            r#"
[[fixture]]
id = "missing-semicolon"
expect = "syntax-error"
file = "missing_semicolon.cpp"
"#,
        )
        .unwrap();

        assert_eq!(manifest.fixtures.len(), 1);
        let fixture = &manifest.fixtures[0];
        assert_eq!(fixture.id, "missing-semicolon");
        assert_eq!(fixture.expect, CategoryId::SyntaxError);
        assert_eq!(
            fixture.source,
            FixtureSource::File(PathBuf::from("missing_semicolon.cpp"))
        );
        assert!(fixture.contains.is_none());
    }

    #[test]
    fn parse_inline_source_and_overrides() {
        let manifest = parse(
            r#"
suffix = ".cc"

[toolchain]
compiler = "clang++"
args = ["-std=c++20", "-fsyntax-only"]
timeout-secs = 5

[[fixture]]
id = "pointer-from-int"
expect = "invalid-type-conversion"
contains = "int"
source = "int* p = 123;"
"#,
        )
        .unwrap();

        assert_eq!(manifest.suffix.as_deref(), Some(".cc"));
        let toolchain = manifest.toolchain.unwrap();
        assert_eq!(toolchain.compiler, Some(PathBuf::from("clang++")));
        assert_eq!(toolchain.timeout_secs, Some(5));
        assert_eq!(manifest.fixtures[0].contains.as_deref(), Some("int"));
    }

    #[test]
    fn order_is_preserved() {
        let manifest = parse(
            r#"
[[fixture]]
id = "b"
expect = "syntax-error"
source = "x"

[[fixture]]
id = "a"
expect = "undefined-symbol"
source = "y"
"#,
        )
        .unwrap();
        let ids: Vec<&str> = manifest.fixtures.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn empty_manifest_is_an_error() {
        let err = parse("suffix = \".cpp\"\n").unwrap_err();
        assert!(matches!(err, FixtureError::EmptyManifest { .. }));
    }

    #[test]
    fn unknown_category_names_the_valid_set() {
        let err = parse(
            r#"
[[fixture]]
id = "x"
expect = "segfault"
source = "int"
"#,
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("segfault"));
        assert!(message.contains("syntax-error"));
        assert!(message.contains("missing-return-value"));
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = parse(
            r#"
[[fixture]]
id = "dup"
expect = "syntax-error"
source = "x"

[[fixture]]
id = "dup"
expect = "syntax-error"
source = "y"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateId { .. }));
    }

    #[test]
    fn source_and_file_together_rejected() {
        let err = parse(
            r#"
[[fixture]]
id = "x"
expect = "syntax-error"
source = "class C { }"
file = "c.cpp"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::AmbiguousSource { .. }));
    }

    #[test]
    fn neither_source_nor_file_rejected() {
        let err = parse(
            r#"
[[fixture]]
id = "x"
expect = "syntax-error"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::AmbiguousSource { .. }));
    }

    #[test]
    fn bad_id_rejected() {
        let err = parse(
            r#"
[[fixture]]
id = "../escape"
expect = "syntax-error"
source = "x"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::InvalidId { .. }));
    }

    #[test]
    fn unknown_manifest_key_rejected() {
        let err = parse(
            r#"
[[fixture]]
id = "x"
expect = "syntax-error"
source = "y"
expected = "typo"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
