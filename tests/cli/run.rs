//! Tests for `envsafe run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_decrypted_secrets() {
    let t = Test::with_secrets(&[("TOKEN", "abc123")]);

    let output = t.run(&["--", "sh", "-c", "echo \"token=$TOKEN\""]);
    assert_success(&output);
    assert_stdout_contains(&output, "token=abc123");
}

#[cfg(unix)]
#[test]
fn test_run_with_prefix() {
    let t = Test::with_secrets(&[("TOKEN", "abc123")]);

    let output = t.run(&["--prefix", "APP_", "--", "sh", "-c", "echo \"$APP_TOKEN\""]);
    assert_success(&output);
    assert_stdout_contains(&output, "abc123");
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_code() {
    let t = Test::with_secrets(&[("TOKEN", "abc123")]);

    let output = t.run(&["--", "sh", "-c", "exit 3"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_run_requires_key() {
    let t = Test::with_secrets(&[("TOKEN", "abc123")]);

    let output = t
        .cmd()
        .args(["run", "--", "true"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "encryption key is required");
}

#[test]
fn test_run_requires_command() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
}
