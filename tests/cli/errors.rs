//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("envsafe") || out.contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_set_without_key_fails() {
    let t = Test::new();

    let output = t.cmd().args(["set", "KEY", "value"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "encryption key is required");
    assert_stderr_contains(&output, "ENVSAFE_KEY");
    assert!(!t.store_path().exists());
}

#[test]
fn test_get_without_key_fails() {
    let t = Test::with_secrets(&[("KEY", "value")]);

    let output = t.cmd().args(["get", "KEY"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "encryption key is required");
}

#[test]
fn test_empty_key_counts_as_missing() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--key", "", "set", "KEY", "value"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "encryption key is required");
}

#[test]
fn test_invalid_key_size_fails() {
    let t = Test::with_key(SHORT_KEY);

    let output = t.set("KEY", "value");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key size");
    assert_stderr_contains(&output, "16, 24, or 32 bytes");
}

#[test]
fn test_wrong_argument_count_fails() {
    let t = Test::new();

    let output = t.keyed().args(["set", "ONLY_KEY"]).output().unwrap();
    assert_failure(&output);

    let output = t.keyed().args(["get"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_corrupt_store_fails() {
    let t = Test::new();
    std::fs::write(t.store_path(), "{ not json").unwrap();

    let output = t.get("KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse store");

    let output = t.set("KEY", "value");
    assert_failure(&output);
}

#[test]
fn test_invalid_config_fails() {
    let t = Test::new();
    std::fs::write(t.dir.path().join(".envsafe.toml"), "store = [").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_completions() {
    let t = Test::new();

    for shell in ["bash", "zsh", "fish", "power-shell"] {
        let output = t.cmd().args(["completions", shell]).output().unwrap();
        assert_success(&output);
        assert_stdout_contains(&output, "envsafe");
        assert_stdout_contains(&output, "load-env");
    }
}
