use anyhow::{Context, Result};
use std::fs;

use crate::artifact::checksum::write_checksum;
use crate::artifact::uber::assemble;
use crate::build::context::BuildContext;

/// Merge the primary jar and all resolved dependencies into the standalone
/// jar.
pub fn run(ctx: BuildContext) -> Result<Option<BuildContext>> {
    ctx.require_main_class()
        .context("a standalone jar needs an entry point")?;

    let staging = ctx.uber_staging_dir();
    if staging.exists() {
        fs::remove_dir_all(&staging)
            .with_context(|| format!("removing stale staging tree '{}'", staging.display()))?;
    }
    fs::create_dir_all(&staging)
        .with_context(|| format!("creating staging tree '{}'", staging.display()))?;

    let dependencies = ctx.classpath();
    println!(
        "[jar:s04_uber] merging {} dependency path(s)",
        dependencies.len()
    );

    let output = ctx.uber_jar_path();
    assemble(&ctx.jar_path(), &dependencies, &staging, &output)
        .with_context(|| format!("assembling '{}'", output.display()))?;
    write_checksum(&output).context("writing standalone jar checksum")?;
    println!("[jar:s04_uber] wrote {}", output.display());
    Ok(Some(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::jar::write_jar;
    use crate::artifact::manifest::Manifest;
    use crate::artifact::uber::read_manifest;
    use std::collections::BTreeMap;
    use std::path::Path;
    use tempfile::TempDir;

    fn context(root: &Path) -> BuildContext {
        BuildContext {
            project_root: root.to_path_buf(),
            target_dir: root.join("target"),
            lib: "my-lib".to_string(),
            version: "1.0".to_string(),
            main_class: Some("Main".to_string()),
            src_dirs: vec![],
            resource_dirs: vec![],
            compiler_options: vec![],
            dependencies: BTreeMap::new(),
        }
    }

    #[test]
    fn missing_main_class_aborts_before_any_merge() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(temp.path());
        ctx.main_class = None;

        let err = run(ctx).unwrap_err();
        assert!(err.to_string().contains("entry point"));
        assert!(!temp.path().join("target/uber").exists());
    }

    #[test]
    fn merges_primary_and_dependencies_into_the_standalone_jar() {
        let temp = TempDir::new().unwrap();
        let mut ctx = context(temp.path());

        // Primary jar with the project's own class.
        fs::create_dir_all(ctx.classes_dir().join("lib")).unwrap();
        fs::write(ctx.classes_dir().join("lib/Util.class"), [0xBB]).unwrap();
        write_jar(
            &ctx.jar_path(),
            &Manifest::standard(Some("Main")).unwrap(),
            &ctx.classes_dir(),
        )
        .unwrap();

        // Dependency jar carrying a colliding class.
        let dep_root = temp.path().join("dep-root");
        fs::create_dir_all(dep_root.join("lib")).unwrap();
        fs::write(dep_root.join("lib/Util.class"), [0xAA]).unwrap();
        let dep_jar = temp.path().join("dep.jar");
        write_jar(&dep_jar, &Manifest::standard(None).unwrap(), &dep_root).unwrap();
        ctx.dependencies
            .insert("org.example/dep".to_string(), vec![dep_jar]);

        let ctx = run(ctx).unwrap().unwrap();

        let standalone = ctx.uber_jar_path();
        assert!(standalone.is_file());
        assert!(ctx.uber_staging_dir().join("lib/Util.class").is_file());

        let manifest = read_manifest(&standalone).unwrap();
        assert_eq!(manifest.get("Main-Class"), Some("Main"));
    }
}
