//! Error types.
//!
//! One top-level [`Error`] with a nested enum per concern, so callers can
//! match on the layer that failed.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Encryption and decryption failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid key size: {0} bytes (must be 16, 24, or 32 bytes)")]
    InvalidKeySize(usize),

    #[error("random number generator unavailable: {0}")]
    Rng(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("ciphertext is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("malformed ciphertext: {len} bytes is shorter than the {min} byte minimum")]
    Malformed { len: usize, min: usize },

    #[error("authentication failed: wrong key or corrupted ciphertext")]
    Authentication,
}

/// Container file failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize store: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Version string failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    Format(String),

    #[error("invalid {component} version: {value}")]
    Component {
        component: &'static str,
        value: String,
    },

    #[error("unknown version increment: {0} (expected major, minor, or patch)")]
    UnknownBump(String),
}

/// Environment bridge failures.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid environment variable name: {0:?}")]
    InvalidName(String),

    #[error("invalid value for environment variable {0}: contains a NUL byte")]
    InvalidValue(String),
}

/// Configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("encryption key is required")]
    MissingKey,

    #[error("environment prefix is required")]
    MissingPrefix,
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret key cannot be empty")]
    EmptyKey,

    #[error("invalid permissions on {path}: expected {expected}, found {actual}")]
    InvalidPermissions {
        path: String,
        expected: String,
        actual: String,
    },
}
