use super::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn discover_empty_dir() {
    let dir = tempdir().unwrap();
    let manifests = discover_manifests(dir.path());
    assert!(manifests.is_empty());
}

#[test]
fn discover_manifest_files() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("fixtures.toml")).unwrap();
    File::create(dir.path().join("notes.toml")).unwrap();
    File::create(dir.path().join("bad.cpp")).unwrap();

    let manifests = discover_manifests(dir.path());
    assert_eq!(manifests.len(), 1);
    assert!(manifests[0].ends_with("fixtures.toml"));
}

#[test]
fn discover_recursive_and_sorted() {
    let dir = tempdir().unwrap();

    let sub_b = dir.path().join("b");
    let sub_a = dir.path().join("a");
    fs::create_dir(&sub_b).unwrap();
    fs::create_dir(&sub_a).unwrap();

    File::create(sub_b.join("fixtures.toml")).unwrap();
    File::create(sub_a.join("fixtures.toml")).unwrap();

    let manifests = discover_manifests(dir.path());
    assert_eq!(manifests.len(), 2);
    assert!(manifests[0].starts_with(&sub_a));
    assert!(manifests[1].starts_with(&sub_b));
}

#[test]
fn skip_hidden_and_target() {
    let dir = tempdir().unwrap();

    let hidden = dir.path().join(".hidden");
    let target = dir.path().join("target");
    fs::create_dir(&hidden).unwrap();
    fs::create_dir(&target).unwrap();

    File::create(hidden.join("fixtures.toml")).unwrap();
    File::create(target.join("fixtures.toml")).unwrap();
    File::create(dir.path().join("fixtures.toml")).unwrap();

    let manifests = discover_manifests(dir.path());
    assert_eq!(manifests.len(), 1);
}

#[test]
fn explicit_toml_file_is_its_own_repository() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom-name.toml");
    File::create(&path).unwrap();

    let manifests = discover_manifests_in(&path);
    assert_eq!(manifests, vec![path]);
}

#[test]
fn explicit_non_toml_file_yields_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fixtures.json");
    File::create(&path).unwrap();

    assert!(discover_manifests_in(&path).is_empty());
}
