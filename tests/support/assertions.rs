//! Assertions over envsafe command output.
//!
//! Messages go to stdout (results, warnings) or stderr (errors, hints,
//! logs); failures print both streams and the exit code.

use std::process::Output;

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Render an output for a failure message.
fn describe(output: &Output) -> String {
    format!(
        "exit: {:?}\n--- stdout ---\n{}--- stderr ---\n{}",
        output.status.code(),
        text(&output.stdout),
        text(&output.stderr)
    )
}

/// Stdout as a String.
pub fn stdout(output: &Output) -> String {
    text(&output.stdout)
}

/// Stderr as a String.
pub fn stderr(output: &Output) -> String {
    text(&output.stderr)
}

pub fn assert_success(output: &Output) {
    assert!(output.status.success(), "expected success\n{}", describe(output));
}

/// Failures from envsafe itself exit with 1; clap usage errors exit with 2.
pub fn assert_failure(output: &Output) {
    assert!(!output.status.success(), "expected failure\n{}", describe(output));
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    assert!(
        stdout(output).contains(expected),
        "stdout missing {:?}\n{}",
        expected,
        describe(output)
    );
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    assert!(
        stderr(output).contains(expected),
        "stderr missing {:?}\n{}",
        expected,
        describe(output)
    );
}

/// Assert a value never shows up on stdout (e.g. `list` must not leak values).
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    assert!(
        !stdout(output).contains(excluded),
        "stdout unexpectedly contains {:?}\n{}",
        excluded,
        describe(output)
    );
}

/// The value `get` printed for `key`, parsed from its `KEY=value` line.
///
/// Returns `None` when no such line exists, e.g. after the
/// "no secret found" warning.
pub fn printed_value(output: &Output, key: &str) -> Option<String> {
    let prefix = format!("{}=", key);
    stdout(output)
        .lines()
        .find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
}

/// Assert `get` printed exactly `value` for `key`.
pub fn assert_value(output: &Output, key: &str, value: &str) {
    assert_success(output);
    assert_eq!(
        printed_value(output, key).as_deref(),
        Some(value),
        "wrong value for {}\n{}",
        key,
        describe(output)
    );
}

/// Assert `get` succeeded but found nothing for `key`.
pub fn assert_no_secret(output: &Output, key: &str) {
    assert_success(output);
    assert_stdout_contains(output, &format!("no secret found for key '{}'", key));
    assert!(printed_value(output, key).is_none(), "{}", describe(output));
}

/// Assert `set` then `get` returns the same value.
pub fn assert_roundtrip(t: &super::Test, key: &str, value: &str) {
    assert_success(&t.set(key, value));
    assert_value(&t.get(key), key, value);
}
