//! Environment bridge.
//!
//! The store reads and writes environment variables through the
//! [`Environment`] trait, so tests and dry runs can swap the real process
//! environment for an in-memory map.

use std::collections::BTreeMap;

use tracing::trace;

use crate::core::validation::validate_env_var;
use crate::error::Result;

/// A readable, writable set of environment variables.
pub trait Environment {
    /// All variables as name/value pairs.
    fn vars(&self) -> Vec<(String, String)>;

    /// Set one variable.
    ///
    /// # Errors
    ///
    /// Returns `EnvError` if the name or value cannot be represented.
    fn set_var(&mut self, name: &str, value: &str) -> Result<()>;
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    /// Variables whose name or value is not valid UTF-8 are skipped.
    fn vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn set_var(&mut self, name: &str, value: &str) -> Result<()> {
        validate_env_var(name, value)?;
        trace!(name, "setting process environment variable");
        std::env::set_var(name, value);
        Ok(())
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a single variable.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MemoryEnv {
    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn set_var(&mut self, name: &str, value: &str) -> Result<()> {
        validate_env_var(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
