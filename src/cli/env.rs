//! Environment import/export commands.

use tracing::info;

use crate::cli::{output, Context};
use crate::core::env::ProcessEnv;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Load secrets from the process environment and save the store.
///
/// Replaces the store file unless `merge` is set (or `merge_env` is enabled
/// in `.envsafe.toml`).
pub fn load(ctx: &Context, prefix: Option<&str>, merge: bool) -> Result<()> {
    let prefix = ctx.config.prefix(prefix)?;
    let merge = merge || ctx.config.merge_env;
    info!(prefix = %prefix, merge, "loading secrets from environment");

    let mut store = if merge {
        SecretStore::load(&ctx.store_path)?
    } else {
        SecretStore::new()
    };

    let mut imported = SecretStore::new();
    imported.load_from_env(&prefix, &ProcessEnv);
    let count = imported.len();
    store.merge(imported);
    store.save(&ctx.store_path)?;

    output::success(&format!(
        "loaded {} secrets from environment variables into {}",
        count,
        output::path(ctx.store_path.display())
    ));
    if count > 0 {
        output::hint("values loaded from the environment are stored unencrypted");
    }
    Ok(())
}

/// Export stored values to the process environment.
pub fn export(ctx: &Context, prefix: Option<&str>) -> Result<()> {
    let prefix = ctx.config.prefix(prefix)?;
    info!(prefix = %prefix, "exporting secrets to environment");

    let store = SecretStore::load(&ctx.store_path)?;
    store.export_to_env(&prefix, &mut ProcessEnv)?;

    output::success(&format!(
        "exported {} secrets to environment variables",
        store.len()
    ));
    Ok(())
}
