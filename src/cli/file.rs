//! Store file import/export commands.

use std::path::Path;

use tracing::info;

use crate::cli::{output, Context};
use crate::core::store::SecretStore;
use crate::error::Result;

/// Merge another store file into the current store.
pub fn import(ctx: &Context, path: &Path) -> Result<()> {
    let enc_key = ctx.key()?;
    info!(path = %path.display(), "importing store file");

    let mut store = SecretStore::load(&ctx.store_path)?;
    store.load_from_file(path, enc_key)?;
    store.save(&ctx.store_path)?;

    output::success(&format!(
        "imported {} (store now holds {} secrets, version {})",
        output::path(path.display()),
        store.len(),
        store.version()
    ));
    Ok(())
}

/// Write every secret, re-encrypted, to another store file.
pub fn export(ctx: &Context, path: &Path) -> Result<()> {
    let enc_key = ctx.key()?;
    info!(path = %path.display(), "exporting store file");

    let store = SecretStore::load(&ctx.store_path)?;
    store.export_to_file(path, enc_key)?;

    output::success(&format!(
        "exported {} secrets to {}",
        store.len(),
        output::path(path.display())
    ));
    Ok(())
}
