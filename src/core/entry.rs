//! Store entries.
//!
//! Every value in a store says whether it holds ciphertext or a raw value
//! imported from the environment.

use serde::{Deserialize, Serialize};

use crate::core::cipher;
use crate::error::Result;

/// A single stored value.
///
/// Encrypted entries serialize as a bare string, so files written only
/// through `set` keep the plain `{"KEY": "<ciphertext>"}` layout. Plaintext
/// entries serialize as `{"plaintext": "<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Ciphertext produced by [`cipher::encrypt`].
    Encrypted(String),
    /// Raw value, stored without encryption.
    Plaintext { plaintext: String },
}

impl Entry {
    /// Encrypt `value` into a new entry.
    ///
    /// # Errors
    ///
    /// Propagates cipher errors (invalid key size, RNG failure).
    pub fn seal(value: &str, key: &[u8]) -> Result<Self> {
        Ok(Entry::Encrypted(cipher::encrypt(value, key)?))
    }

    /// Wrap a raw value.
    pub fn plaintext(value: impl Into<String>) -> Self {
        Entry::Plaintext {
            plaintext: value.into(),
        }
    }

    /// Resolve the entry to its plaintext.
    ///
    /// Plaintext entries are returned unchanged and ignore `key`.
    ///
    /// # Errors
    ///
    /// Propagates cipher errors for encrypted entries.
    pub fn reveal(&self, key: &[u8]) -> Result<String> {
        match self {
            Entry::Encrypted(ciphertext) => cipher::decrypt(ciphertext, key),
            Entry::Plaintext { plaintext } => Ok(plaintext.clone()),
        }
    }

    /// The stored string, exactly as it appears in the file.
    pub fn raw(&self) -> &str {
        match self {
            Entry::Encrypted(ciphertext) => ciphertext,
            Entry::Plaintext { plaintext } => plaintext,
        }
    }

    /// Whether the entry holds ciphertext.
    pub fn is_encrypted(&self) -> bool {
        matches!(self, Entry::Encrypted(_))
    }

    /// Short label for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Encrypted(_) => "encrypted",
            Entry::Plaintext { .. } => "plaintext",
        }
    }
}
