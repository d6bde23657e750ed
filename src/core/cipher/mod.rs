//! Cryptographic operations.
//!
//! Encrypts and decrypts individual secret values with a raw symmetric key
//! supplied by the caller. The key is never stored.
//!
//! ## Format
//!
//! `base64url(iv || ciphertext || tag)` where the IV is 16 random bytes and
//! the tag is the 16-byte AES-GCM authentication tag. A wrong key or any
//! modification of the encoded value fails decryption.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::error::{CipherError, Result};

mod aes;

pub use self::aes::Gcm;

/// Cryptographic backend trait.
///
/// Abstracts value encryption so the store does not depend on a concrete
/// construction.
pub trait Cipher {
    /// Encrypt a plaintext string with a raw key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key size is invalid, the system RNG is
    /// unavailable, or encryption fails.
    fn encrypt(&self, plaintext: &str, key: &[u8]) -> Result<String>;

    /// Decrypt a string produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key size is invalid, the input is not
    /// decodable, or authentication fails.
    fn decrypt(&self, encrypted: &str, key: &[u8]) -> Result<String>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

/// AES strength selected by the raw key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// Key strength in bits.
    pub fn bits(self) -> usize {
        match self {
            KeySize::Aes128 => 128,
            KeySize::Aes192 => 192,
            KeySize::Aes256 => 256,
        }
    }
}

/// Check that a raw key is 16, 24, or 32 bytes long.
///
/// # Errors
///
/// Returns `CipherError::InvalidKeySize` for any other length.
pub fn validate_key_size(key: &[u8]) -> Result<KeySize> {
    match key.len() {
        16 => Ok(KeySize::Aes128),
        24 => Ok(KeySize::Aes192),
        32 => Ok(KeySize::Aes256),
        len => Err(CipherError::InvalidKeySize(len).into()),
    }
}

/// Encrypt a value with the default backend.
///
/// Every call draws a fresh IV, so encrypting the same value twice yields
/// two different strings.
///
/// # Errors
///
/// See [`Cipher::encrypt`].
pub fn encrypt(plaintext: &str, key: &[u8]) -> Result<String> {
    Gcm.encrypt(plaintext, key)
}

/// Decrypt a value with the default backend.
///
/// # Errors
///
/// See [`Cipher::decrypt`].
pub fn decrypt(encrypted: &str, key: &[u8]) -> Result<String> {
    Gcm.decrypt(encrypted, key)
}
