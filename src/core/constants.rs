//! Constants used throughout envsafe.
//!
//! Centralizes magic strings and configuration values.

/// Default container file name.
pub const STORE_FILE: &str = "secrets.json";

/// Optional configuration file name (.envsafe.toml).
pub const CONFIG_FILE: &str = ".envsafe.toml";

/// Version tag given to freshly created stores.
pub const DEFAULT_STORE_VERSION: &str = "1.0";

/// Unix permissions for the container file.
pub const STORE_FILE_MODE: u32 = 0o600;

/// Length of the per-value initialization vector, in bytes.
pub const IV_LEN: usize = 16;

/// Length of the AES-GCM authentication tag, in bytes.
pub const TAG_LEN: usize = 16;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ENVSAFE_LOG";

/// Environment variable selecting the log format (`json` or plain).
pub const LOG_FORMAT_ENV: &str = "ENVSAFE_LOG_FORMAT";
