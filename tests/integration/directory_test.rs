//! Integration tests for batch directory conversion

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn json2md() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("json2md").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_batch_directory_conversion() {
    let input_dir = tempdir().unwrap();
    write(input_dir.path(), "a.json", r#"{"name": "Alice"}"#);
    write(input_dir.path(), "sub/b.txt", "not json");
    write(input_dir.path(), "sub/c.json", r#"{"name": "Carol"}"#);

    let output_dir = tempdir().unwrap();
    json2md()
        .arg(input_dir.path())
        .arg("--output")
        .arg(output_dir.path())
        .arg("--recursive")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 converted, 0 failed"));

    assert_eq!(
        fs::read_to_string(output_dir.path().join("a.md")).unwrap(),
        "# name\n\nAlice\n\n"
    );
    assert!(output_dir.path().join("sub/c.md").exists());
    assert!(!output_dir.path().join("sub/b.md").exists());
}

#[test]
fn test_without_recursive_only_top_level_is_converted() {
    let input_dir = tempdir().unwrap();
    write(input_dir.path(), "top.json", r#"{"k": 1}"#);
    write(input_dir.path(), "nested/inner.json", r#"{"k": 2}"#);

    json2md().arg(input_dir.path()).assert().success();

    assert!(input_dir.path().join("top.md").exists());
    assert!(!input_dir.path().join("nested/inner.md").exists());
}

#[test]
fn test_abort_on_error_default() {
    let input_dir = tempdir().unwrap();
    write(input_dir.path(), "bad.json", "{ name: invalid }");
    write(input_dir.path(), "good.json", r#"{"name": "OK"}"#);

    json2md()
        .arg(input_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("bad.json"));

    // bad.json sorts first, so good.json is never reached
    assert!(!input_dir.path().join("good.md").exists());
}

#[test]
fn test_continue_on_error_flag() {
    let input_dir = tempdir().unwrap();
    write(input_dir.path(), "bad.json", "{ name: invalid }");
    write(input_dir.path(), "good.json", r#"{"name": "OK"}"#);

    json2md()
        .arg(input_dir.path())
        .arg("--continue-on-error")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("1 converted, 1 failed"))
        .stderr(predicate::str::contains("1 of 2 files failed"));

    assert!(input_dir.path().join("good.md").exists());
    assert!(!input_dir.path().join("bad.md").exists());
}

#[test]
fn test_empty_directory_succeeds() {
    let input_dir = tempdir().unwrap();

    json2md()
        .arg(input_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No JSON files found"));
}
