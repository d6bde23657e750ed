//! Run command.
//!
//! Executes a command with decrypted secrets injected as environment variables.

use crate::cli::Context;
use crate::core::store::SecretStore;
use crate::error::{Error, Result};

/// Run a command with secrets injected as environment variables.
pub fn execute(ctx: &Context, prefix: &str, command: &[String]) -> Result<()> {
    let store = SecretStore::load(&ctx.store_path)?;
    let exit_code = run_with_secrets(&store, ctx.key()?, prefix, command)?;
    std::process::exit(exit_code);
}

/// Run a command with decrypted secrets as environment variables.
///
/// Returns the child's exit code, or 1 if it was terminated by a signal.
pub fn run_with_secrets(
    store: &SecretStore,
    enc_key: &[u8],
    prefix: &str,
    command: &[String],
) -> Result<i32> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| Error::Other("no command specified".to_string()))?;

    let pairs = store.decrypt_all(enc_key)?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);
    for (key, value) in &pairs {
        cmd.env(format!("{}{}", prefix, key), value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
