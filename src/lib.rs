//! EnvSafe - a local encrypted store for environment secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── secrets       # set, get, rm, list
//! │   ├── env           # load-env, export-env, run
//! │   ├── file          # import-file, export-file
//! │   ├── version       # version, bump
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── cipher/       # AES-GCM value encryption
//!     ├── entry         # Plaintext / encrypted entry tag
//!     ├── store/        # SecretStore and its JSON container
//!     ├── version       # Semantic version tag
//!     ├── env           # Environment bridge
//!     ├── config        # .envsafe.toml
//!     └── validation    # Input checks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use envsafe::core::store::SecretStore;
//!
//! # fn main() -> envsafe::error::Result<()> {
//! let key = b"0123456789abcdef";
//! let mut store = SecretStore::load("secrets.json")?;
//! store.set("DATABASE_URL", "postgres://localhost/db", key)?;
//! store.save("secrets.json")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
