use anyhow::{Context, Result};
use std::fs;

use crate::build::context::BuildContext;

/// Delete and recreate the target directory.
pub fn run(ctx: BuildContext) -> Result<Option<BuildContext>> {
    let target = &ctx.target_dir;
    if target.exists() {
        fs::remove_dir_all(target)
            .with_context(|| format!("removing target directory '{}'", target.display()))?;
    }
    fs::create_dir_all(target)
        .with_context(|| format!("creating target directory '{}'", target.display()))?;
    println!("[jar:s00_clean] cleaned {}", target.display());
    Ok(Some(ctx))
}
