//! Command-line interface.

pub mod completions;
pub mod env;
pub mod file;
pub mod output;
pub mod run;
pub mod secrets;
pub mod version;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// EnvSafe - a local encrypted store for environment secrets.
#[derive(Parser)]
#[command(
    name = "envsafe",
    about = "Securely store, retrieve, and manage environment variables",
    version
)]
pub struct Cli {
    /// Path to the secrets store file [default: secrets.json]
    #[arg(short, long, global = true, env = "ENVSAFE_FILE")]
    pub file: Option<PathBuf>,

    /// Encryption key for securing secrets (16, 24, or 32 bytes)
    #[arg(short, long, global = true, env = "ENVSAFE_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Set a secret
    Set {
        /// Secret key (e.g., DATABASE_URL)
        key: String,
        /// Secret value
        value: String,
    },

    /// Get a secret
    Get {
        /// Secret key
        key: String,
    },

    /// Remove a secret
    Rm {
        /// Secret key
        key: String,
    },

    /// List stored keys
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load secrets from environment variables
    LoadEnv {
        /// Variable name prefix to match and strip
        #[arg(env = "ENVSAFE_PREFIX")]
        prefix: Option<String>,
        /// Merge into the existing store instead of replacing it
        #[arg(long)]
        merge: bool,
    },

    /// Export secrets to environment variables
    ExportEnv {
        /// Prefix prepended to each key
        #[arg(env = "ENVSAFE_PREFIX")]
        prefix: Option<String>,
    },

    /// Run a command with decrypted secrets injected as env vars
    Run {
        /// Prefix prepended to each key
        #[arg(long, env = "ENVSAFE_PREFIX", default_value = "")]
        prefix: String,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Merge secrets from another store file
    ImportFile {
        /// Store file to import
        path: PathBuf,
    },

    /// Write all secrets, freshly encrypted, to another store file
    ExportFile {
        /// Destination file
        path: PathBuf,
    },

    /// Show or set the store version
    Version {
        /// Replace the version (major.minor.patch)
        #[arg(long)]
        set: Option<String>,
    },

    /// Increment the store version
    Bump {
        /// Component to increment
        #[arg(value_parser = ["major", "minor", "patch"])]
        kind: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Settings resolved from flags, environment, and `.envsafe.toml`.
pub struct Context {
    pub config: Config,
    pub store_path: PathBuf,
    key: Option<Zeroizing<Vec<u8>>>,
}

impl Context {
    /// Resolve settings for this invocation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `.envsafe.toml` exists but is invalid.
    pub fn resolve(file: Option<PathBuf>, key: Option<String>) -> Result<Self> {
        let config = Config::load()?;
        let store_path = config.store_path(file.as_deref());
        debug!(store = %store_path.display(), "resolved store path");

        Ok(Self {
            config,
            store_path,
            key: key
                .filter(|k| !k.is_empty())
                .map(|k| Zeroizing::new(k.into_bytes())),
        })
    }

    /// The encryption key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if none was supplied.
    pub fn key(&self) -> Result<&[u8]> {
        self.key
            .as_deref()
            .map(Vec::as_slice)
            .ok_or_else(|| ConfigError::MissingKey.into())
    }
}

/// Execute a command.
pub fn execute(command: Command, ctx: &Context) -> Result<()> {
    use Command::*;

    match command {
        Set { key, value } => secrets::set(ctx, &key, &value),
        Get { key } => secrets::get(ctx, &key),
        Rm { key } => secrets::rm(ctx, &key),
        List { json } => secrets::list(ctx, json),
        LoadEnv { prefix, merge } => env::load(ctx, prefix.as_deref(), merge),
        ExportEnv { prefix } => env::export(ctx, prefix.as_deref()),
        Run { prefix, command } => run::execute(ctx, &prefix, &command),
        ImportFile { path } => file::import(ctx, &path),
        ExportFile { path } => file::export(ctx, &path),
        Version { set } => version::show(ctx, set.as_deref()),
        Bump { kind } => version::bump(ctx, &kind),
        Completions { shell } => completions::execute(shell),
    }
}
