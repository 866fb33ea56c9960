//! Project descriptor (`project.toml`) loading.
//!
//! ```toml
//! [project]
//! lib = "my-lib"
//! version = "1.0.0"
//! main-class = "demo.Main"          # optional
//! target-dir = "target"             # optional
//! src-dirs = ["src"]                # optional
//! resource-dirs = ["resources"]     # optional
//! compiler-options = ["-Xlint:all"] # optional
//!
//! [dependencies]
//! "org.example/util" = ["libs/util-1.2.jar"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::context::BuildContext;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectToml {
    project: ProjectSection,
    #[serde(default)]
    dependencies: BTreeMap<String, Vec<PathBuf>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct ProjectSection {
    lib: String,
    version: String,
    main_class: Option<String>,
    target_dir: Option<PathBuf>,
    src_dirs: Option<Vec<PathBuf>>,
    resource_dirs: Option<Vec<PathBuf>>,
    compiler_options: Option<Vec<String>>,
}

/// Load a build context from a project descriptor.
///
/// Relative paths in the descriptor resolve against the directory the
/// descriptor lives in.
pub fn load_project(config_path: &Path) -> Result<BuildContext> {
    let raw = fs::read_to_string(config_path)
        .with_context(|| format!("reading project descriptor '{}'", config_path.display()))?;
    let parsed: ProjectToml = toml::from_str(&raw)
        .with_context(|| format!("parsing project descriptor '{}'", config_path.display()))?;

    let project_root = config_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let section = parsed.project;

    let target_dir =
        project_root.join(section.target_dir.unwrap_or_else(|| PathBuf::from("target")));
    let dependencies = parsed
        .dependencies
        .into_iter()
        .map(|(id, paths)| {
            let resolved = paths.into_iter().map(|p| project_root.join(p)).collect();
            (id, resolved)
        })
        .collect();

    let ctx = BuildContext {
        src_dirs: resolve_dirs(&project_root, section.src_dirs, "src"),
        resource_dirs: resolve_dirs(&project_root, section.resource_dirs, "resources"),
        target_dir,
        lib: section.lib,
        version: section.version,
        main_class: section.main_class,
        compiler_options: section.compiler_options.unwrap_or_default(),
        dependencies,
        project_root,
    };
    ctx.validate()
        .with_context(|| format!("validating project descriptor '{}'", config_path.display()))?;
    Ok(ctx)
}

fn resolve_dirs(root: &Path, dirs: Option<Vec<PathBuf>>, default: &str) -> Vec<PathBuf> {
    dirs.unwrap_or_else(|| vec![PathBuf::from(default)])
        .into_iter()
        .map(|dir| root.join(dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_descriptor(temp: &TempDir, content: &str) -> PathBuf {
        let path = temp.path().join("project.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_a_full_descriptor() {
        let temp = TempDir::new().unwrap();
        let path = write_descriptor(
            &temp,
            r#"
[project]
lib = "my-lib"
version = "1.0.0"
main-class = "demo.Main"
src-dirs = ["src/main/java"]
compiler-options = ["-Xlint:all"]

[dependencies]
"org.example/util" = ["libs/util-1.2.jar", "libs/util-extras"]
"#,
        );

        let ctx = load_project(&path).unwrap();
        assert_eq!(ctx.lib, "my-lib");
        assert_eq!(ctx.version, "1.0.0");
        assert_eq!(ctx.main_class.as_deref(), Some("demo.Main"));
        assert_eq!(ctx.target_dir, temp.path().join("target"));
        assert_eq!(ctx.src_dirs, vec![temp.path().join("src/main/java")]);
        assert_eq!(ctx.compiler_options, vec!["-Xlint:all".to_string()]);
        assert_eq!(
            ctx.classpath(),
            vec![
                temp.path().join("libs/util-1.2.jar"),
                temp.path().join("libs/util-extras"),
            ]
        );
    }

    #[test]
    fn applies_defaults_for_optional_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_descriptor(&temp, "[project]\nlib = \"m\"\nversion = \"0.1\"\n");

        let ctx = load_project(&path).unwrap();
        assert!(ctx.main_class.is_none());
        assert_eq!(ctx.target_dir, temp.path().join("target"));
        assert_eq!(ctx.src_dirs, vec![temp.path().join("src")]);
        assert_eq!(ctx.resource_dirs, vec![temp.path().join("resources")]);
        assert!(ctx.dependencies.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_descriptor(
            &temp,
            "[project]\nlib = \"m\"\nversion = \"0.1\"\ntypo-field = true\n",
        );
        assert!(load_project(&path).is_err());
    }

    #[test]
    fn rejects_missing_coordinates() {
        let temp = TempDir::new().unwrap();
        let path = write_descriptor(&temp, "[project]\nversion = \"0.1\"\n");
        assert!(load_project(&path).is_err());
    }

    #[test]
    fn rejects_invalid_main_class() {
        let temp = TempDir::new().unwrap();
        let path = write_descriptor(
            &temp,
            "[project]\nlib = \"m\"\nversion = \"0.1\"\nmain-class = \"demo Main\"\n",
        );
        assert!(load_project(&path).is_err());
    }
}
