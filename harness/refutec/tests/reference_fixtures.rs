//! The shipped reference fixtures stay loadable and correctly declared.
//!
//! These tests never invoke a compiler: they pin the repository shape so
//! the seven reference fixtures keep covering the full category set.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::PathBuf;

use refute_fixture::{CategoryId, Manifest};

fn reference_manifest() -> Manifest {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/cpp/fixtures.toml");
    Manifest::load(&path).unwrap()
}

#[test]
fn reference_manifest_loads_all_seven() {
    let manifest = reference_manifest();
    assert_eq!(manifest.fixtures.len(), 7);
}

#[test]
fn every_category_has_a_reference_fixture() {
    let manifest = reference_manifest();
    for category in CategoryId::ALL {
        assert!(
            manifest.fixtures.iter().any(|f| f.expect == category),
            "no reference fixture for category {category}"
        );
    }
}

#[test]
fn every_reference_source_resolves() {
    let manifest = reference_manifest();
    let dir = manifest.dir().to_path_buf();
    for fixture in &manifest.fixtures {
        let source = fixture.source_text(&dir).unwrap();
        assert!(
            !source.trim().is_empty(),
            "fixture {} has an empty source file",
            fixture.id
        );
    }
}

#[test]
fn missing_return_fixture_avoids_main() {
    // `main` gets an implicit `return 0`, which would make this fixture
    // compile cleanly; it must use a named function.
    let manifest = reference_manifest();
    let fixture = manifest
        .fixtures
        .iter()
        .find(|f| f.expect == CategoryId::MissingReturnValue)
        .unwrap();
    let source = fixture.source_text(manifest.dir()).unwrap();
    assert!(!source.contains("main"));
}
