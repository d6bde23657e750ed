//! Test support utilities for envsafe integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory for the command
    pub dir: TempDir,
    /// Encryption key passed with `--key`
    pub key: String,
}

impl Test {
    /// Create a new empty test environment using [`TEST_KEY`].
    pub fn new() -> Self {
        Self::with_key(TEST_KEY)
    }

    /// Create a test environment with a specific encryption key.
    pub fn with_key(key: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self {
            dir,
            key: key.to_string(),
        }
    }

    /// Create a test environment with secrets set.
    pub fn with_secrets(secrets: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (k, v) in secrets {
            let output = t.set(k, v);
            assert!(
                output.status.success(),
                "Failed to set secret {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Path of the default store file.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("secrets.json")
    }

    /// Read the default store file as JSON.
    pub fn store_json(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.store_path()).expect("store file missing");
        serde_json::from_str(&contents).expect("store file is not JSON")
    }
}
