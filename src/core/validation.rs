//! Input validation for envsafe operations.
//!
//! Validates secret keys, environment variable names, and file permissions.

use crate::error::{EnvError, Result, ValidationError};

/// Validate a secret key name.
///
/// Secret keys may hold any characters, but cannot be empty.
///
/// # Errors
///
/// Returns `ValidationError::EmptyKey` if the key is empty.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }
    Ok(())
}

/// Validate an environment variable name/value pair.
///
/// Names cannot be empty or contain `=` or NUL; values cannot contain NUL.
/// The standard library panics on these instead of returning an error.
///
/// # Errors
///
/// Returns `EnvError::InvalidName` or `EnvError::InvalidValue`.
pub fn validate_env_var(name: &str, value: &str) -> Result<()> {
    if name.is_empty() || name.contains('=') || name.contains('\0') {
        return Err(EnvError::InvalidName(name.to_string()).into());
    }
    if value.contains('\0') {
        return Err(EnvError::InvalidValue(name.to_string()).into());
    }
    Ok(())
}

/// Validate file permissions (Unix only).
///
/// Checks that a file has the expected permissions mode.
///
/// # Arguments
///
/// * `path` - Path to the file
/// * `expected_mode` - Expected permissions mode (e.g., 0o600)
///
/// # Errors
///
/// Returns `ValidationError` if permissions don't match.
#[cfg(unix)]
pub fn validate_file_permissions(path: &std::path::Path, expected_mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        return Err(ValidationError::InvalidPermissions {
            path: path.display().to_string(),
            expected: format!("{:o}", expected_mode),
            actual: format!("{:o}", actual_mode),
        }
        .into());
    }

    Ok(())
}
