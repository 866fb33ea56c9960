use anyhow::{Context, Result};
use std::fs;

use crate::build::context::BuildContext;

/// Synchronize the project descriptor into the packaged tree.
///
/// Copies the project's `pom.xml` into `classes/META-INF/maven/<lib>/`,
/// generating a minimal descriptor when the project has none.
pub fn run(ctx: BuildContext) -> Result<Option<BuildContext>> {
    let source = ctx.project_root.join("pom.xml");
    let dest_dir = ctx.classes_dir().join("META-INF/maven").join(&ctx.lib);
    fs::create_dir_all(&dest_dir)
        .with_context(|| format!("creating descriptor directory '{}'", dest_dir.display()))?;
    let dest = dest_dir.join("pom.xml");

    if source.is_file() {
        fs::copy(&source, &dest).with_context(|| {
            format!("copying '{}' to '{}'", source.display(), dest.display())
        })?;
        println!("[jar:s02_descriptor] synced {}", source.display());
    } else {
        fs::write(&dest, minimal_descriptor(&ctx.lib, &ctx.version))
            .with_context(|| format!("writing generated descriptor '{}'", dest.display()))?;
        println!("[jar:s02_descriptor] generated minimal descriptor");
    }

    Ok(Some(ctx))
}

fn minimal_descriptor(lib: &str, version: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n\
         \x20 <modelVersion>4.0.0</modelVersion>\n\
         \x20 <groupId>{lib}</groupId>\n\
         \x20 <artifactId>{lib}</artifactId>\n\
         \x20 <version>{version}</version>\n\
         </project>\n"
    )
}
