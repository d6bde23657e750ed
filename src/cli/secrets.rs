//! Secret management commands (set, get, rm, list).

use tracing::info;

use crate::cli::{output, Context};
use crate::core::store::SecretStore;
use crate::core::validation::validate_key;
use crate::error::Result;

/// Set a secret value.
///
/// The command line refuses empty key names; the store itself accepts them.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    validate_key(key)?;
    let enc_key = ctx.key()?;
    info!("Setting secret: {}", key);

    let mut store = SecretStore::load(&ctx.store_path)?;
    store.set(key, value, enc_key)?;
    store.save(&ctx.store_path)?;

    output::success(&format!("secret for key '{}' set", output::key(key)));
    Ok(())
}

/// Get a secret value.
///
/// Prints `KEY=value`, or a warning if the key holds no value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let enc_key = ctx.key()?;

    let store = SecretStore::load(&ctx.store_path)?;
    let value = store.get(key, enc_key)?;

    if value.is_empty() {
        output::warn(&format!("no secret found for key '{}'", key));
    } else {
        println!("{}={}", key, value);
    }
    Ok(())
}

/// Remove a secret.
pub fn rm(ctx: &Context, key: &str) -> Result<()> {
    info!("Removing secret: {}", key);

    let mut store = SecretStore::load(&ctx.store_path)?;
    if store.remove(key).is_none() {
        output::warn(&format!("no secret found for key '{}'", key));
        return Ok(());
    }
    store.save(&ctx.store_path)?;

    output::success(&format!("removed {}", output::key(key)));
    Ok(())
}

/// List stored keys.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let store = SecretStore::load(&ctx.store_path)?;

    if json {
        let entries: Vec<_> = store
            .entries()
            .map(|(key, entry)| serde_json::json!({ "key": key, "kind": entry.kind() }))
            .collect();
        let report = serde_json::json!({
            "version": store.version(),
            "count": store.len(),
            "secrets": entries,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if store.is_empty() {
        output::dimmed("no secrets stored");
    } else {
        println!("{} secrets (version {}):", store.len(), store.version());
        for (key, entry) in store.entries() {
            if entry.is_encrypted() {
                println!("  {}", key);
            } else {
                println!("  {} ({})", key, entry.kind());
            }
        }
    }

    Ok(())
}
