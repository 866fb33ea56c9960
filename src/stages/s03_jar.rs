use anyhow::{Context, Result};

use crate::artifact::checksum::write_checksum;
use crate::artifact::jar::write_jar;
use crate::artifact::manifest::Manifest;
use crate::build::context::BuildContext;

/// Package `classes/` as the primary jar.
pub fn run(ctx: BuildContext) -> Result<Option<BuildContext>> {
    let manifest =
        Manifest::standard(ctx.main_class.as_deref()).context("building jar manifest")?;
    let jar = ctx.jar_path();
    write_jar(&jar, &manifest, &ctx.classes_dir())
        .with_context(|| format!("writing '{}'", jar.display()))?;
    write_checksum(&jar).context("writing jar checksum")?;
    println!("[jar:s03_jar] wrote {}", jar.display());
    Ok(Some(ctx))
}
