//! AES-GCM backend implementation.
//!
//! AES-128/192/256 in GCM mode with a 16-byte random nonce, encoded as
//! URL-safe base64.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::aes::{Aes128, Aes192, Aes256};
use aes_gcm::AesGcm;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::trace;

use super::{validate_key_size, Cipher, KeySize};
use crate::core::constants::{IV_LEN, TAG_LEN};
use crate::error::{CipherError, Result};

type Aes128Gcm16 = AesGcm<Aes128, U16>;
type Aes192Gcm16 = AesGcm<Aes192, U16>;
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// AES-GCM backend keyed by the caller's raw key.
pub struct Gcm;

impl Cipher for Gcm {
    fn name(&self) -> &'static str {
        "aes-gcm"
    }

    fn encrypt(&self, plaintext: &str, key: &[u8]) -> Result<String> {
        let size = validate_key_size(key)?;
        trace!(
            bits = size.bits(),
            plaintext_len = plaintext.len(),
            "encrypting"
        );

        let mut iv = [0u8; IV_LEN];
        OsRng
            .try_fill_bytes(&mut iv)
            .map_err(|e| CipherError::Rng(e.to_string()))?;

        let sealed = match size {
            KeySize::Aes128 => seal::<Aes128Gcm16>(key, &iv, plaintext.as_bytes())?,
            KeySize::Aes192 => seal::<Aes192Gcm16>(key, &iv, plaintext.as_bytes())?,
            KeySize::Aes256 => seal::<Aes256Gcm16>(key, &iv, plaintext.as_bytes())?,
        };

        let mut out = Vec::with_capacity(IV_LEN + sealed.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&sealed);

        trace!(ciphertext_len = out.len(), "encrypted");

        Ok(URL_SAFE.encode(out))
    }

    fn decrypt(&self, encrypted: &str, key: &[u8]) -> Result<String> {
        let size = validate_key_size(key)?;
        trace!(
            bits = size.bits(),
            ciphertext_len = encrypted.len(),
            "decrypting"
        );

        let bytes = URL_SAFE
            .decode(encrypted.as_bytes())
            .map_err(CipherError::Decode)?;

        let min = IV_LEN + TAG_LEN;
        if bytes.len() < min {
            return Err(CipherError::Malformed {
                len: bytes.len(),
                min,
            }
            .into());
        }

        let (iv, payload) = bytes.split_at(IV_LEN);
        let decrypted = match size {
            KeySize::Aes128 => open::<Aes128Gcm16>(key, iv, payload)?,
            KeySize::Aes192 => open::<Aes192Gcm16>(key, iv, payload)?,
            KeySize::Aes256 => open::<Aes256Gcm16>(key, iv, payload)?,
        };

        trace!(plaintext_len = decrypted.len(), "decrypted");

        String::from_utf8(decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

fn seal<C: Aead + KeyInit>(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| CipherError::InvalidKeySize(key.len()))?;
    cipher
        .encrypt(Nonce::<C>::from_slice(iv), plaintext)
        .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)).into())
}

fn open<C: Aead + KeyInit>(key: &[u8], iv: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    let cipher = C::new_from_slice(key).map_err(|_| CipherError::InvalidKeySize(key.len()))?;
    cipher
        .decrypt(Nonce::<C>::from_slice(iv), payload)
        .map_err(|_| CipherError::Authentication.into())
}
