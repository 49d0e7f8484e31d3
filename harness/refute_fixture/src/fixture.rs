//! The fixture record: metadata plus a source blob.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::category::CategoryId;
use crate::error::FixtureError;

/// Where a fixture's source text lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureSource {
    /// Source text embedded in the manifest.
    Inline(String),
    /// Path to a sidecar source file, relative to the manifest.
    File(PathBuf),
}

/// One minimal, self-contained invalid source snippet paired with the
/// diagnostic category it must provoke.
///
/// Immutable once parsed; never mutated or destroyed at run time.
#[derive(Clone, Debug)]
pub struct Fixture {
    /// Unique id within its manifest (e.g. `missing-semicolon`). Also used
    /// as the scratch file stem when the source is materialized.
    pub id: String,
    /// The source blob.
    pub source: FixtureSource,
    /// Category the compiler diagnostic must fall into.
    pub expect: CategoryId,
    /// Optional extra substring the diagnostic text must carry, refining
    /// the category check for this one fixture.
    pub contains: Option<String>,
    /// Park the fixture without deleting it; the reason is reported.
    pub skip: Option<String>,
}

impl Fixture {
    /// Resolve the source text, reading sidecar files lazily.
    ///
    /// `manifest_dir` anchors relative `file` paths.
    pub fn source_text<'a>(&'a self, manifest_dir: &Path) -> Result<Cow<'a, str>, FixtureError> {
        match &self.source {
            FixtureSource::Inline(text) => Ok(Cow::Borrowed(text)),
            FixtureSource::File(rel) => {
                let path = manifest_dir.join(rel);
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| FixtureError::Io { path, source })
            }
        }
    }

    /// Short description of where the source lives, for listings.
    pub fn source_kind(&self) -> String {
        match &self.source {
            FixtureSource::Inline(_) => "inline".to_string(),
            FixtureSource::File(rel) => format!("file {}", rel.display()),
        }
    }
}

/// Check that an id is safe to use as a scratch file stem.
///
/// Rejects path separators, empty ids, and ids starting with a dot.
pub(crate) fn id_is_valid(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('.')
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_source_borrows() {
        let fixture = Fixture {
            id: "pointer-from-int".to_string(),
            source: FixtureSource::Inline("int* p = 123;".to_string()),
            expect: CategoryId::InvalidTypeConversion,
            contains: None,
            skip: None,
        };
        let text = fixture.source_text(Path::new("/nowhere")).unwrap();
        assert_eq!(text, "int* p = 123;");
    }

    #[test]
    fn file_source_reads_relative_to_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.cpp"), "class C { }").unwrap();

        let fixture = Fixture {
            id: "missing-semicolon".to_string(),
            source: FixtureSource::File(PathBuf::from("bad.cpp")),
            expect: CategoryId::SyntaxError,
            contains: None,
            skip: None,
        };
        let text = fixture.source_text(dir.path()).unwrap();
        assert_eq!(text, "class C { }");
    }

    #[test]
    fn missing_file_source_is_io_error() {
        let fixture = Fixture {
            id: "gone".to_string(),
            source: FixtureSource::File(PathBuf::from("does-not-exist.cpp")),
            expect: CategoryId::SyntaxError,
            contains: None,
            skip: None,
        };
        let err = fixture.source_text(Path::new("/nowhere")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }

    #[test]
    fn id_validation() {
        assert!(id_is_valid("missing-semicolon"));
        assert!(id_is_valid("overload_2.v1"));
        assert!(!id_is_valid(""));
        assert!(!id_is_valid(".hidden"));
        assert!(!id_is_valid("a/b"));
        assert!(!id_is_valid("a b"));
    }
}
