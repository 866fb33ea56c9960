use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::artifact::collect::files_with_suffix;
use crate::artifact::explode::explode;
use crate::build::compiler::compile;
use crate::build::context::BuildContext;

/// Suffix selecting compilable sources.
pub const SOURCE_SUFFIX: &str = ".java";

/// Compile sources into `classes/` and copy resource trees in alongside.
pub fn run(ctx: BuildContext) -> Result<Option<BuildContext>> {
    let classes = ctx.classes_dir();
    fs::create_dir_all(&classes)
        .with_context(|| format!("creating classes directory '{}'", classes.display()))?;

    let mut sources: Vec<PathBuf> = Vec::new();
    for dir in &ctx.src_dirs {
        sources.extend(files_with_suffix(dir, SOURCE_SUFFIX).map(|rel| dir.join(rel)));
    }

    if sources.is_empty() {
        println!("[jar:s01_compile] no sources found, nothing to compile");
    } else {
        println!("[jar:s01_compile] compiling {} source file(s)", sources.len());
        compile(&sources, &ctx.classpath(), &classes, &ctx.compiler_options)
            .context("compiling sources")?;
    }

    for dir in &ctx.resource_dirs {
        if dir.is_dir() {
            explode(dir, &classes)
                .with_context(|| format!("copying resources from '{}'", dir.display()))?;
        }
    }

    Ok(Some(ctx))
}
