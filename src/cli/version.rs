//! Store version commands (version, bump).

use tracing::info;

use crate::cli::{output, Context};
use crate::core::store::SecretStore;
use crate::core::version::{ParseMode, Version};
use crate::error::Result;

/// Show the store version, or replace it with `set`.
pub fn show(ctx: &Context, set: Option<&str>) -> Result<()> {
    let mut store = SecretStore::load(&ctx.store_path)?;

    if let Some(raw) = set {
        let version = Version::parse(raw, ParseMode::Strict)?;
        info!(from = store.version(), to = %version, "setting store version");
        store.set_version(version);
        store.save(&ctx.store_path)?;
        output::success(&format!("version set to {}", version));
        return Ok(());
    }

    println!("{}", store.version());
    if store.parsed_version(ParseMode::Strict).is_err() {
        output::hint("not a major.minor.patch version; the next bump starts from 1.0.0");
    }
    Ok(())
}

/// Increment the store version and save.
pub fn bump(ctx: &Context, kind: &str) -> Result<()> {
    let mut store = SecretStore::load(&ctx.store_path)?;
    let before = store.version().to_string();

    store.increment_version(kind);
    store.save(&ctx.store_path)?;

    output::kv("from", &before);
    output::kv("to", store.version());
    Ok(())
}
