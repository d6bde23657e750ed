//! Filesystem persistence for secret stores.
//!
//! Stores are written as pretty-printed JSON with owner-only permissions.
//! There is no locking: concurrent writers race and the last one wins.

#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use tracing::{debug, warn};

use super::SecretStore;
use crate::error::{Result, StoreError};

/// Serialize a store to its container text.
///
/// # Errors
///
/// Returns `StoreError::Serialize` if serialization fails.
pub fn to_string(store: &SecretStore) -> Result<String> {
    let mut contents = serde_json::to_string_pretty(store).map_err(StoreError::Serialize)?;
    contents.push('\n');
    Ok(contents)
}

/// Write a store to `path` in one whole-file write.
///
/// The file is created with mode 0600 on Unix, and the mode is reapplied
/// when an existing file is overwritten.
///
/// # Errors
///
/// Returns `StoreError::Serialize` or `StoreError::Write`.
pub fn save(store: &SecretStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), secrets = store.len(), "saving store");

    let contents = to_string(store)?;
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(crate::core::constants::STORE_FILE_MODE)
            .open(path)
            .map_err(write_err)?;
        file.write_all(contents.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        std::fs::set_permissions(
            path,
            std::fs::Permissions::from_mode(crate::core::constants::STORE_FILE_MODE),
        )
        .map_err(write_err)?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents).map_err(write_err)?;
    }

    Ok(())
}

/// Load a store, returning `None` if the file does not exist.
///
/// # Errors
///
/// Returns `StoreError::Read` for other read failures and
/// `StoreError::Parse` if the contents are not a valid store.
pub fn try_load(path: impl AsRef<Path>) -> Result<Option<SecretStore>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading store");

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };

    #[cfg(unix)]
    {
        if let Err(e) = crate::core::validation::validate_file_permissions(
            path,
            crate::core::constants::STORE_FILE_MODE,
        ) {
            warn!("{}", e);
        }
    }

    let store: SecretStore = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(secrets = store.len(), version = store.version(), "store loaded");
    Ok(Some(store))
}

/// Load a store, or a fresh empty one if the file does not exist.
///
/// # Errors
///
/// See [`try_load`].
pub fn load(path: impl AsRef<Path>) -> Result<SecretStore> {
    let path = path.as_ref();
    match try_load(path)? {
        Some(store) => Ok(store),
        None => {
            debug!(path = %path.display(), "store not found, starting empty");
            Ok(SecretStore::new())
        }
    }
}
