//! Secret store.
//!
//! An in-memory map from logical key to [`Entry`], plus a version tag. All
//! value transformations go through the cipher module; the raw key is
//! passed to every call and never kept.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::entry::Entry;
use crate::core::env::Environment;
use crate::core::version::{ParseMode, Version};
use crate::error::Result;

pub mod fs;

/// Encrypted secrets plus a version tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretStore {
    #[serde(default)]
    secrets: BTreeMap<String, Entry>,
    #[serde(default = "default_version")]
    version: String,
}

fn default_version() -> String {
    constants::DEFAULT_STORE_VERSION.to_string()
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretStore {
    // --- Construction ---
    /// Create an empty store at version `1.0`.
    pub fn new() -> Self {
        Self {
            secrets: BTreeMap::new(),
            version: default_version(),
        }
    }

    /// Load a store from disk, or an empty one if the file is missing.
    ///
    /// # Errors
    ///
    /// See [`fs::load`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        fs::load(path)
    }

    /// Save the store to disk with owner-only permissions.
    ///
    /// # Errors
    ///
    /// See [`fs::save`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::save(self, path)
    }

    // --- Secrets ---
    /// Encrypt `value` and store it under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Propagates cipher errors unchanged. Any string, including `""`, is
    /// accepted as a key.
    pub fn set(&mut self, key: &str, value: &str, enc_key: &[u8]) -> Result<()> {
        let entry = Entry::seal(value, enc_key)?;
        self.secrets.insert(key.to_string(), entry);
        Ok(())
    }

    /// Get the plaintext for `key`.
    ///
    /// An absent key yields an empty string, not an error. Use
    /// [`SecretStore::lookup`] to tell absence apart from an empty value.
    ///
    /// # Errors
    ///
    /// Propagates cipher errors when decrypting an encrypted entry.
    pub fn get(&self, key: &str, enc_key: &[u8]) -> Result<String> {
        Ok(self.lookup(key, enc_key)?.unwrap_or_default())
    }

    /// Get the plaintext for `key`, or `None` if absent.
    ///
    /// Plaintext entries are returned as stored; encrypted entries are
    /// decrypted with `enc_key`.
    ///
    /// # Errors
    ///
    /// Propagates cipher errors when decrypting an encrypted entry.
    pub fn lookup(&self, key: &str, enc_key: &[u8]) -> Result<Option<String>> {
        self.secrets
            .get(key)
            .map(|entry| entry.reveal(enc_key))
            .transpose()
    }

    /// Remove an entry, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.secrets.remove(key)
    }

    /// The raw entry for `key`.
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.secrets.get(key)
    }

    /// All entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.secrets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All keys in order.
    pub fn keys(&self) -> Vec<String> {
        self.secrets.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Resolve every entry to its plaintext.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot be decrypted.
    pub fn decrypt_all(&self, enc_key: &[u8]) -> Result<Vec<(String, Zeroizing<String>)>> {
        self.secrets
            .iter()
            .map(|(key, entry)| -> Result<(String, Zeroizing<String>)> {
                Ok((key.clone(), Zeroizing::new(entry.reveal(enc_key)?)))
            })
            .collect()
    }

    /// Copy every entry of `other` into this store, overwriting on conflict.
    pub fn merge(&mut self, other: SecretStore) {
        debug!(incoming = other.len(), existing = self.len(), "merging stores");
        self.secrets.extend(other.secrets);
    }

    // --- Environment ---
    /// Import every variable whose name starts with `prefix`.
    ///
    /// Values are stored as plaintext entries under the name with the
    /// prefix stripped. Nothing is encrypted and no key is needed.
    pub fn load_from_env(&mut self, prefix: &str, env: &impl Environment) {
        let mut imported = 0usize;
        for (name, value) in env.vars() {
            if let Some(key) = name.strip_prefix(prefix) {
                self.secrets.insert(key.to_string(), Entry::plaintext(value));
                imported += 1;
            }
        }
        debug!(prefix, imported, "loaded secrets from environment");
    }

    /// Set `prefix + key` for every entry to the stored string as-is.
    ///
    /// Plaintext entries export their value; encrypted entries export the
    /// raw ciphertext.
    ///
    /// # Errors
    ///
    /// Returns `EnvError` if a variable cannot be set.
    pub fn export_to_env(&self, prefix: &str, env: &mut impl Environment) -> Result<()> {
        for (key, entry) in &self.secrets {
            env.set_var(&format!("{}{}", prefix, key), entry.raw())?;
        }
        debug!(prefix, exported = self.secrets.len(), "exported secrets to environment");
        Ok(())
    }

    // --- Files ---
    /// Merge a container file into this store.
    ///
    /// Every entry in the file is decrypted with `enc_key` and stored here
    /// re-encrypted under the same key. The store takes the file's version.
    /// If any entry fails to decrypt, this store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns store or cipher errors.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>, enc_key: &[u8]) -> Result<()> {
        let loaded = fs::load(path)?;

        let mut incoming = BTreeMap::new();
        for (key, entry) in &loaded.secrets {
            let plaintext = Zeroizing::new(entry.reveal(enc_key)?);
            incoming.insert(key.clone(), Entry::seal(&plaintext, enc_key)?);
        }

        debug!(entries = incoming.len(), version = %loaded.version, "loaded secrets from file");
        self.secrets.extend(incoming);
        self.version = loaded.version;
        Ok(())
    }

    /// Write every entry, encrypted under `enc_key`, to a new container file.
    ///
    /// The exported file carries this store's version.
    ///
    /// # Errors
    ///
    /// Returns store or cipher errors.
    pub fn export_to_file(&self, path: impl AsRef<Path>, enc_key: &[u8]) -> Result<()> {
        let mut export = SecretStore::new();
        export.version = self.version.clone();

        for (key, entry) in &self.secrets {
            let plaintext = Zeroizing::new(entry.reveal(enc_key)?);
            export
                .secrets
                .insert(key.clone(), Entry::seal(&plaintext, enc_key)?);
        }

        debug!(entries = export.len(), "exporting secrets to file");
        export.save(path)
    }

    // --- Version ---
    /// The raw version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parse the version string under the given policy.
    ///
    /// # Errors
    ///
    /// Returns `VersionError` only under [`ParseMode::Strict`].
    pub fn parsed_version(&self, mode: ParseMode) -> Result<Version> {
        Version::parse(&self.version, mode)
    }

    /// Replace the version tag.
    pub fn set_version(&mut self, version: Version) {
        self.version = version.to_string();
    }

    /// Increment the version by `kind` (`major`, `minor`, or `patch`).
    ///
    /// An unparsable version is replaced by `1.0.0` before incrementing, and
    /// an unknown `kind` leaves the number unchanged.
    pub fn increment_version(&mut self, kind: &str) {
        let mut version = Version::parse_or_default(&self.version);
        version.increment_named(kind);
        debug!(from = %self.version, to = %version, "incremented version");
        self.version = version.to_string();
    }
}
