//! Tests for `envsafe export-file/import-file`.

use crate::support::*;

#[test]
fn test_export_and_import_file() {
    let source = Test::with_secrets(&[("X", "1"), ("Y", "2")]);
    let out = source.dir.path().join("out.json");
    let out = out.to_str().unwrap();

    let output = source.export_file(out);
    assert_success(&output);
    assert_stdout_contains(&output, "exported 2 secrets");

    let target = Test::with_secrets(&[("LOCAL", "kept")]);
    let output = target.import_file(out);
    assert_success(&output);

    assert_value(&target.get("X"), "X", "1");
    assert_value(&target.get("Y"), "Y", "2");
    assert_value(&target.get("LOCAL"), "LOCAL", "kept");
}

#[test]
fn test_export_file_reencrypts_values() {
    let t = Test::with_secrets(&[("X", "1")]);
    let out = t.dir.path().join("out.json");

    assert_success(&t.export_file(out.to_str().unwrap()));

    let original = t.store_json();
    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_ne!(original["secrets"]["X"], exported["secrets"]["X"]);
    assert_eq!(original["version"], exported["version"]);
}

#[test]
fn test_export_file_encrypts_env_imports() {
    let t = Test::new();
    assert_success(&t.load_env("ESTEST_", &[("ESTEST_DB", "5432")]));

    let out = t.dir.path().join("out.json");
    assert_success(&t.export_file(out.to_str().unwrap()));

    let exported: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(exported["secrets"]["DB"].is_string());
}

#[test]
fn test_import_file_takes_version() {
    let source = Test::with_secrets(&[("X", "1")]);
    assert_success(&source.bump("major"));
    let out = source.dir.path().join("out.json");
    assert_success(&source.export_file(out.to_str().unwrap()));

    let target = Test::new();
    assert_success(&target.import_file(out.to_str().unwrap()));

    let output = target.version();
    assert_stdout_contains(&output, "2.0.0");
}

#[test]
fn test_import_file_with_wrong_key_fails() {
    let source = Test::with_secrets(&[("X", "1")]);
    let out = source.dir.path().join("out.json");
    assert_success(&source.export_file(out.to_str().unwrap()));

    let target = Test::with_key(OTHER_KEY);
    let output = target.import_file(out.to_str().unwrap());
    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
}

#[test]
fn test_import_file_invalid_json_fails() {
    let t = Test::new();
    let bad = t.dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();

    let output = t.import_file(bad.to_str().unwrap());
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse store");
}
